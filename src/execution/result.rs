//! Execution result types.

/// Result of a completed command execution.
#[derive(Debug, Clone, Default)]
pub struct ExecutionResult {
    /// Exit code reported by the child. 0 means success; a child killed
    /// by a signal reports -1.
    pub exit_code: i32,
    /// Captured standard output (empty if not captured).
    pub stdout: String,
    /// Captured standard error (empty if not captured).
    pub stderr: String,
}

impl ExecutionResult {
    /// Create a result from an exit code and captured output.
    ///
    /// Each stream has at most one trailing newline stripped.
    pub fn new(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout: chomp(stdout),
            stderr: chomp(stderr),
        }
    }

    /// Create a result carrying only an exit code.
    pub fn from_exit_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Check if the command succeeded (exit code 0).
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Get stdout lines.
    pub fn stdout_lines(&self) -> impl Iterator<Item = &str> {
        self.stdout.lines()
    }
}

/// Strip a single trailing newline (and a preceding carriage return)
/// from the given text.
pub(crate) fn chomp(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
