//! Shell command execution.
//!
//! This module provides the subprocess-execution core:
//! - Shell command lines with environment and working-directory overrides
//! - Capture, quiet, and pass-through output modes
//! - A check policy turning non-zero exit codes into errors
//!
//! # Example
//!
//! ```no_run
//! use shellkit::execution::{run_captured, Command, ProcessRunner};
//!
//! # async fn demo() -> shellkit::Result<()> {
//! // Simple one-shot execution
//! let result = run_captured("echo hello").await?;
//! println!("Output: {}", result.stdout);
//!
//! // Command with options
//! let cmd = Command::new("make install")
//!     .working_dir("/project")
//!     .env("PREFIX", "/usr/local")
//!     .check(false);
//! let result = ProcessRunner::new().run(&cmd).await?;
//! # Ok(())
//! # }
//! ```

mod command;
mod executor;
mod result;

pub use command::Command;
pub use executor::{run_captured, run_simple, ProcessRunner};
pub use result::ExecutionResult;
