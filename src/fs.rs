//! Filesystem helpers.
//!
//! Small idempotent wrappers around `std::fs`: read, guarded write, touch,
//! and recursive directory creation. Failures propagate unmodified as I/O
//! errors.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use crate::Result;

/// Read a file into a string.
pub fn read(path: impl AsRef<Path>) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write text to a file.
///
/// When the file already exists and `force` is false, the call is a no-op
/// and the existing contents are kept.
pub fn write(path: impl AsRef<Path>, text: &str, force: bool) -> Result<()> {
    let path = path.as_ref();
    if path.exists() && !force {
        return Ok(());
    }
    fs::write(path, text)?;
    Ok(())
}

/// Create an empty file if absent; leave an existing file alone.
pub fn touch(path: impl AsRef<Path>) -> Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    Ok(())
}

/// Create a directory and all missing parents.
///
/// Fails with an `AlreadyExists` I/O error if the path exists and
/// `exist_ok` is false; with `exist_ok` the call is idempotent.
pub fn makedirs(path: impl AsRef<Path>, exist_ok: bool) -> Result<()> {
    let path = path.as_ref();
    if path.exists() && !exist_ok {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("directory already exists: {}", path.display()),
        )
        .into());
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// Check whether a path exists.
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("foobar.txt");
        fs::write(&path, "foobar").unwrap();

        assert_eq!(read(&path).unwrap(), "foobar");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let result = read(dir.path().join("absent.txt"));
        assert!(matches!(result, Err(crate::ShellkitError::Io(_))));
    }

    #[test]
    fn test_write_is_guarded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("foobar.txt");

        write(&path, "A", false).unwrap();
        assert_eq!(read(&path).unwrap(), "A");

        // Existing file, no force: contents untouched.
        write(&path, "B", false).unwrap();
        assert_eq!(read(&path).unwrap(), "A");

        write(&path, "B", true).unwrap();
        assert_eq!(read(&path).unwrap(), "B");
    }

    #[test]
    fn test_touch_creates_and_preserves() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("foo");

        assert!(!path_exists(&path));
        touch(&path).unwrap();
        assert!(path_exists(&path));

        fs::write(&path, "content").unwrap();
        touch(&path).unwrap();
        assert_eq!(read(&path).unwrap(), "content");
    }

    #[test]
    fn test_makedirs_recursive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("foo").join("bar");

        makedirs(&path, false).unwrap();
        assert!(path_exists(&path));

        makedirs(&path, true).unwrap();
        assert!(path_exists(&path));

        let result = makedirs(&path, false);
        match result {
            Err(crate::ShellkitError::Io(e)) => {
                assert_eq!(e.kind(), io::ErrorKind::AlreadyExists);
            }
            other => panic!("expected AlreadyExists, got {:?}", other),
        }
    }
}
