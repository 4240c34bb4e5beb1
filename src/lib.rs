//! # shellkit
//!
//! Small cross-platform shell execution and filesystem utility layer.
//!
//! This crate provides a subprocess-execution engine with controllable
//! output capture, environment overrides, working-directory selection,
//! and a configurable error-propagation policy, alongside a handful of
//! idempotent filesystem helpers and system-introspection queries.
//!
//! ## Features
//!
//! - **Shell execution**: command lines run through the platform shell,
//!   with capture, quiet, and pass-through output modes
//! - **Environment merge**: caller overrides overlaid on the inherited
//!   process environment
//! - **Filesystem helpers**: guarded write, touch, recursive mkdir
//! - **Introspection**: PATH executable lookup, environment report
//!
//! ## Trust boundary
//!
//! Command lines are executed through a shell verbatim, so pipes and
//! variable expansion work as written. Never pass untrusted input as a
//! command line.
//!
//! ## Quick Start
//!
//! ```no_run
//! use shellkit::execution::{run_captured, Command, ProcessRunner};
//!
//! #[tokio::main]
//! async fn main() -> shellkit::Result<()> {
//!     // Initialize logging
//!     shellkit::logging::try_init().ok();
//!
//!     let result = run_captured("echo Hello, World!").await?;
//!     assert_eq!(result.stdout, "Hello, World!");
//!
//!     // Non-zero exit codes as data instead of errors
//!     let cmd = Command::new("grep -q needle haystack.txt").check(false);
//!     let result = ProcessRunner::new().run(&cmd).await?;
//!     println!("grep exited with {}", result.exit_code);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod execution;
pub mod fs;
pub mod logging;
pub mod sysinfo;

// Re-export commonly used types
pub use error::{Result, ShellkitError};
pub use execution::{run_captured, run_simple, Command, ExecutionResult, ProcessRunner};
pub use sysinfo::{environment, which, which_checked};
