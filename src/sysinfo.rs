//! Executable lookup and environment reporting.

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

use crate::error::ShellkitError;
use crate::Result;

/// Find an executable by name on PATH.
///
/// Returns the first matching executable file, or `None`. On Windows the
/// extensions listed in `PATHEXT` are tried in addition to the bare name.
pub fn which(name: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    for dir in env::split_paths(&path_var) {
        for candidate in candidates(&dir, name) {
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Find an executable by name on PATH, failing when absent.
pub fn which_checked(name: &str) -> Result<PathBuf> {
    which(name).ok_or_else(|| ShellkitError::ExecutableNotFound(name.to_string()))
}

#[cfg(unix)]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    vec![dir.join(name)]
}

#[cfg(windows)]
fn candidates(dir: &Path, name: &str) -> Vec<PathBuf> {
    let mut out = vec![dir.join(name)];
    if let Some(pathext) = env::var_os("PATHEXT") {
        for ext in pathext.to_string_lossy().split(';') {
            if !ext.is_empty() {
                out.push(dir.join(format!("{}{}", name, ext.to_lowercase())));
            }
        }
    }
    out
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(windows)]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Report the runtime environment.
///
/// Contains at least `runtime_version`, `os`, and `arch`.
pub fn environment() -> HashMap<String, String> {
    HashMap::from([
        (
            "runtime_version".to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
        ),
        ("os".to_string(), env::consts::OS.to_string()),
        ("arch".to_string(), env::consts::ARCH.to_string()),
    ])
}
