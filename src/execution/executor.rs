//! Command execution engine.

use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command as OsCommand;
use tracing::debug;

use super::command::Command;
use super::result::ExecutionResult;
use crate::error::ShellkitError;
use crate::Result;

#[cfg(unix)]
const SHELL: [&str; 2] = ["sh", "-c"];
#[cfg(windows)]
const SHELL: [&str; 2] = ["cmd", "/C"];

/// Runner for one-shot shell commands.
///
/// Stateless; each [`run`](ProcessRunner::run) call owns its child process
/// handle and stream buffers exclusively, and nothing outlives the call.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new process runner.
    pub fn new() -> Self {
        Self
    }

    /// Execute a command and wait for it to terminate.
    ///
    /// Output handling, first match wins:
    /// 1. `quiet`: both streams go to the null sink, result text is empty.
    /// 2. `capture`: both streams are drained concurrently into memory and
    ///    returned with one trailing newline stripped.
    /// 3. neither: the child inherits this process's stdout/stderr.
    ///
    /// With `check` active (the default), a non-zero exit code fails with
    /// [`ShellkitError::CommandFailed`]. A process that cannot be started
    /// at all fails with [`ShellkitError::Launch`] regardless of `check`.
    pub async fn run(&self, command: &Command) -> Result<ExecutionResult> {
        if command.command_line.trim().is_empty() {
            return Err(ShellkitError::EmptyCommand);
        }

        // Quiet takes precedence: never capture when discarding.
        let capture = command.capture && !command.quiet;

        let mut child_cmd = OsCommand::new(SHELL[0]);
        child_cmd.arg(SHELL[1]).arg(&command.command_line);
        child_cmd.env_clear().envs(command.merged_env());

        if let Some(ref dir) = command.working_dir {
            child_cmd.current_dir(dir);
        }

        if command.quiet {
            child_cmd.stdout(Stdio::null()).stderr(Stdio::null());
        } else if capture {
            child_cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        } else {
            child_cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        debug!(command = %command.command_line, quiet = command.quiet, capture, "spawning child");

        let mut child = child_cmd.spawn().map_err(|source| ShellkitError::Launch {
            command: command.command_line.clone(),
            source,
        })?;

        // Drain both pipes concurrently before waiting; reading one stream
        // to completion while the other fills its buffer can stall the
        // child.
        let stdout_task = tokio::spawn(drain(child.stdout.take()));
        let stderr_task = tokio::spawn(drain(child.stderr.take()));

        let status = child.wait().await?;
        let stdout = stdout_task.await.unwrap_or_default();
        let stderr = stderr_task.await.unwrap_or_default();

        // A child killed by a signal has no exit code; report -1.
        let exit_code = status.code().unwrap_or(-1);
        debug!(command = %command.command_line, exit_code, "child terminated");

        let result = ExecutionResult::new(exit_code, stdout, stderr);
        if command.check && !result.success() {
            return Err(ShellkitError::CommandFailed {
                code: result.exit_code,
                stdout: result.stdout,
                stderr: result.stderr,
            });
        }

        Ok(result)
    }
}

/// Read a child output pipe to end-of-stream, decoding lossily.
async fn drain<R>(pipe: Option<R>) -> String
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        let _ = pipe.read_to_end(&mut buf).await;
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Simple one-shot execution with pass-through output.
pub async fn run_simple(command_line: &str) -> Result<ExecutionResult> {
    ProcessRunner::new().run(&Command::new(command_line)).await
}

/// One-shot execution with both streams captured.
pub async fn run_captured(command_line: &str) -> Result<ExecutionResult> {
    ProcessRunner::new()
        .run(&Command::new(command_line).capture(true))
        .await
}
