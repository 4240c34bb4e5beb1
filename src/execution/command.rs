//! Command building and representation.

use std::collections::HashMap;
use std::path::PathBuf;

/// A command to be executed through the shell.
///
/// The command line is handed to a shell verbatim (`sh -c` on Unix,
/// `cmd /C` on Windows), so shell features like pipes and variable
/// expansion work as written. That also means the caller is trusted:
/// never build a command line from untrusted input.
#[derive(Debug, Clone)]
pub struct Command {
    /// The command line to execute.
    pub command_line: String,
    /// Working directory override (if any).
    pub working_dir: Option<PathBuf>,
    /// Environment variables overlaid on the inherited environment.
    pub env: HashMap<String, String>,
    /// Whether to capture stdout/stderr into memory.
    pub capture: bool,
    /// Whether to discard stdout/stderr entirely. Takes precedence
    /// over `capture`.
    pub quiet: bool,
    /// Whether a non-zero exit code becomes an error.
    pub check: bool,
}

impl Command {
    /// Create a new command with the given command line.
    ///
    /// Defaults: pass-through output, check mode on.
    pub fn new(command_line: impl Into<String>) -> Self {
        Self {
            command_line: command_line.into(),
            working_dir: None,
            env: HashMap::new(),
            capture: false,
            quiet: false,
            check: true,
        }
    }

    /// Set the working directory.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Add an environment variable override.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Add multiple environment variable overrides.
    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in vars {
            self.env.insert(k.into(), v.into());
        }
        self
    }

    /// Set whether to capture output.
    pub fn capture(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    /// Set whether to discard output entirely.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Set whether a non-zero exit code becomes an error.
    pub fn check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Compute the child's effective environment.
    ///
    /// Starts from the full inherited environment of the calling process,
    /// then overwrites/inserts every key present in this command's `env`
    /// map. Inherited entries that are not valid UTF-8 are skipped.
    pub fn merged_env(&self) -> HashMap<String, String> {
        let mut merged: HashMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        for (k, v) in &self.env {
            merged.insert(k.clone(), v.clone());
        }
        merged
    }
}

impl Default for Command {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_new() {
        let cmd = Command::new("ls -la");
        assert_eq!(cmd.command_line, "ls -la");
        assert!(cmd.working_dir.is_none());
        assert!(cmd.env.is_empty());
        assert!(!cmd.capture);
        assert!(!cmd.quiet);
        assert!(cmd.check);
    }

    #[test]
    fn test_command_builder_chain() {
        let cmd = Command::new("cargo build")
            .working_dir("/project")
            .env("RUST_LOG", "debug")
            .capture(true)
            .check(false);

        assert_eq!(cmd.command_line, "cargo build");
        assert_eq!(cmd.working_dir, Some(PathBuf::from("/project")));
        assert_eq!(cmd.env.get("RUST_LOG"), Some(&"debug".to_string()));
        assert!(cmd.capture);
        assert!(!cmd.check);
    }

    #[test]
    fn test_command_envs() {
        let vars = [("KEY1", "val1"), ("KEY2", "val2")];
        let cmd = Command::new("echo").envs(vars);

        assert_eq!(cmd.env.len(), 2);
        assert_eq!(cmd.env.get("KEY1"), Some(&"val1".to_string()));
        assert_eq!(cmd.env.get("KEY2"), Some(&"val2".to_string()));
    }

    #[test]
    fn test_merged_env_inherits_parent() {
        std::env::set_var("SHELLKIT_TEST_INHERITED", "parent-value");
        let cmd = Command::new("true").env("SHELLKIT_TEST_LOCAL", "local-value");

        let merged = cmd.merged_env();
        assert_eq!(
            merged.get("SHELLKIT_TEST_INHERITED").map(String::as_str),
            Some("parent-value")
        );
        assert_eq!(
            merged.get("SHELLKIT_TEST_LOCAL").map(String::as_str),
            Some("local-value")
        );
        std::env::remove_var("SHELLKIT_TEST_INHERITED");
    }

    #[test]
    fn test_merged_env_override_wins() {
        std::env::set_var("SHELLKIT_TEST_CLOBBER", "old");
        let cmd = Command::new("true").env("SHELLKIT_TEST_CLOBBER", "new");

        let merged = cmd.merged_env();
        assert_eq!(
            merged.get("SHELLKIT_TEST_CLOBBER").map(String::as_str),
            Some("new")
        );
        std::env::remove_var("SHELLKIT_TEST_CLOBBER");
    }

    #[test]
    fn test_merged_env_keeps_path() {
        // PATH resolution for the child must keep working even when
        // overrides are supplied.
        let cmd = Command::new("true").env("FOOBAR", "foobar");
        let merged = cmd.merged_env();
        assert!(merged.contains_key("PATH"));
    }
}
