//! Command-line interface for shellkit.
//!
//! Uses lexopt for minimal binary size overhead.

use std::ffi::OsString;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Command line to execute (positional words, joined by spaces).
    pub command: Vec<String>,
    /// Capture stdout/stderr and print them after the run.
    pub capture: bool,
    /// Discard the command's output entirely.
    pub quiet: bool,
    /// Environment variable overrides (KEY=VALUE).
    pub env: Vec<(String, String)>,
    /// Working directory for the command.
    pub chdir: Option<PathBuf>,
    /// Do not fail on a non-zero exit code; report it instead.
    pub no_check: bool,
    /// Resolve an executable on PATH and print its location.
    pub which: Option<String>,
    /// Print the environment report as JSON.
    pub env_report: bool,
    /// Path to configuration file.
    pub config: Option<PathBuf>,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Short('o') | Long("capture") => {
                result.capture = true;
            }
            Short('q') | Long("quiet") => {
                result.quiet = true;
            }
            Short('e') | Long("env") => {
                let value: String = parser.value()?.parse()?;
                let (key, val) = value
                    .split_once('=')
                    .ok_or_else(|| ArgsError::InvalidValue("env", value.clone()))?;
                result.env.push((key.to_string(), val.to_string()));
            }
            Short('C') | Long("chdir") => {
                result.chdir = Some(parser.value()?.parse()?);
            }
            Long("no-check") => {
                result.no_check = true;
            }
            Short('w') | Long("which") => {
                result.which = Some(parser.value()?.parse()?);
            }
            Long("env-report") => {
                result.env_report = true;
            }
            Short('c') | Long("config") => {
                result.config = Some(parser.value()?.parse()?);
            }
            Short('l') | Long("log-level") => {
                result.log_level = Some(parser.value()?.parse()?);
            }
            Value(val) => {
                result.command.push(val.to_string_lossy().into());
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    Ok(result)
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"shellkit {version}
Small cross-platform shell execution and filesystem utility layer

USAGE:
    shellkit [OPTIONS] [COMMAND]...

OPTIONS:
    -o, --capture           Capture stdout/stderr and print them after the run
    -q, --quiet             Discard the command's output entirely
    -e, --env <KEY=VALUE>   Environment override for the command (repeatable)
    -C, --chdir <DIR>       Working directory for the command
        --no-check          Report a non-zero exit code instead of failing
    -w, --which <NAME>      Resolve an executable on PATH and print its path
        --env-report        Print the environment report as JSON
    -c, --config <FILE>     Path to configuration file (JSON)
    -l, --log-level <LVL>   Log level (error, warn, info, debug, trace)
    -h, --help              Print help
    -V, --version           Print version

ENVIRONMENT VARIABLES:
    SHELLKIT_NO_CHECK       Set to 1/true to default to --no-check
    SHELLKIT_LOG_LEVEL      Log level (overrides config)
    RUST_LOG                Alternative log level setting

EXAMPLES:
    # Run a command, echoing its output
    shellkit ls -la

    # Capture output, overriding the environment and working directory
    shellkit -o -e PREFIX=/usr/local -C /project make install

    # Inspect the exit code of a failing command
    shellkit --no-check -q grep -q needle haystack.txt

    # Where does "python" live?
    shellkit -w python
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("shellkit {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// Invalid argument value.
    InvalidValue(&'static str, String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::InvalidValue(name, value) => {
                write!(f, "invalid value for --{}: '{}'", name, value)
            }
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}
