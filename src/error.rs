//! Error types for shellkit.

use thiserror::Error;

/// Main error type for shellkit operations.
#[derive(Error, Debug)]
pub enum ShellkitError {
    /// A command exited with a non-zero code while check mode was active.
    ///
    /// Carries the captured streams when capture was active, empty text
    /// otherwise.
    #[error("command exited with code {code}: {stderr}")]
    CommandFailed {
        /// Exit code reported by the child.
        code: i32,
        /// Captured standard output (empty if not captured).
        stdout: String,
        /// Captured standard error (empty if not captured).
        stderr: String,
    },

    /// The child process could not be started at all.
    ///
    /// Covers a missing shell, a missing working directory, and permission
    /// denial. Surfaced regardless of the check policy.
    #[error("failed to launch command '{command}': {source}")]
    Launch {
        /// The command line that failed to start.
        command: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// An empty command line was submitted.
    #[error("empty command line")]
    EmptyCommand,

    /// No executable with the given name was found on PATH.
    #[error("executable not found on PATH: {0}")]
    ExecutableNotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for shellkit operations.
pub type Result<T> = std::result::Result<T, ShellkitError>;
