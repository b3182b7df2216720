//! Filesystem utility functions
//!
//! Existence probing and the write-to-temp-then-rename replace used for both
//! `~/.gitconfig` and the marker file.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{GitconfError, Result};

/// Suffix appended to the target's file name for the temporary sibling
pub const TEMP_SUFFIX: &str = ".tmp_gitconf";

/// Check whether `path` exists
///
/// "Not found" yields `Ok(false)`. Any other stat failure (permission denied
/// on a parent, for instance) is returned as [`GitconfError::Probe`] and must
/// not be read as absence.
pub fn path_exists(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(GitconfError::Probe {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Temporary sibling of `target`: same directory, `.tmp_gitconf` appended
pub fn temp_path(target: &Path) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}

/// Write `contents` to `target` atomically
///
/// The bytes land in [`temp_path`] first and are then renamed over `target`,
/// so readers see either the old or the new content, never a partial write.
/// The rename is only atomic when both paths share a filesystem, which holds
/// for a sibling temp file.
pub fn write_atomic(target: &Path, contents: &[u8]) -> Result<()> {
    let temp = temp_path(target);

    if let Err(source) = fs::write(&temp, contents) {
        discard_temp(&temp);
        return Err(GitconfError::Write { path: temp, source });
    }

    if let Err(source) = fs::rename(&temp, target) {
        discard_temp(&temp);
        return Err(GitconfError::Rename {
            from: temp,
            to: target.to_path_buf(),
            source,
        });
    }

    debug!(target = %target.display(), bytes = contents.len(), "atomic write complete");
    Ok(())
}

/// Replace `target` with the bytes of `source`
pub fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    let contents = fs::read(source).map_err(|e| GitconfError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    debug!(
        source = %source.display(),
        target = %target.display(),
        "replacing file contents"
    );
    write_atomic(target, &contents)
}

fn discard_temp(temp: &Path) {
    match fs::remove_file(temp) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => warn!(path = %temp.display(), error = %e, "could not remove temp file"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_exists() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("present");
        fs::write(&file, "x").unwrap();

        assert!(path_exists(&file).unwrap());
        assert!(path_exists(temp_dir.path()).unwrap());
        assert!(!path_exists(&temp_dir.path().join("absent")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_path_exists_probe_error() {
        let temp_dir = TempDir::new().unwrap();
        // A path that walks through a regular file fails with ENOTDIR, not ENOENT
        let file = temp_dir.path().join("plain");
        fs::write(&file, "x").unwrap();

        let err = path_exists(&file.join("child")).unwrap_err();
        assert!(matches!(err, GitconfError::Probe { .. }));
    }

    #[test]
    fn test_temp_path() {
        let temp = temp_path(Path::new("/home/me/.gitconfig"));
        assert_eq!(temp, Path::new("/home/me/.gitconfig.tmp_gitconf"));
    }

    #[test]
    fn test_atomic_replace_copies_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("work.gitconfig");
        let target = temp_dir.path().join(".gitconfig");
        let contents = b"[user]\n\tname = Work Me\n\temail = me@work.example\n";
        fs::write(&source, contents).unwrap();
        fs::write(&target, "[user]\n\tname = Old\n").unwrap();

        atomic_replace(&source, &target).unwrap();

        assert_eq!(fs::read(&target).unwrap(), contents);
        assert_eq!(fs::read(&source).unwrap(), contents);
        assert!(!temp_path(&target).exists());
    }

    #[test]
    fn test_atomic_replace_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join(".gitconfig");
        fs::write(&target, "original").unwrap();

        let err = atomic_replace(&temp_dir.path().join("missing"), &target).unwrap_err();
        assert!(matches!(err, GitconfError::Read { .. }));
        assert_eq!(fs::read_to_string(&target).unwrap(), "original");
    }

    #[test]
    fn test_write_atomic_rename_failure_cleans_temp() {
        let temp_dir = TempDir::new().unwrap();
        // Renaming a file over a non-empty directory fails
        let target = temp_dir.path().join("occupied");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("inside"), "x").unwrap();

        let err = write_atomic(&target, b"data").unwrap_err();
        assert!(matches!(err, GitconfError::Rename { .. }));
        assert!(!temp_path(&target).exists());
    }

    #[test]
    fn test_write_atomic_missing_parent() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("no-such-dir").join("file");

        let err = write_atomic(&target, b"data").unwrap_err();
        assert!(matches!(err, GitconfError::Write { .. }));
    }
}
