//! Backup copies of target files.
//! A backup lives next to its file, named by appending [`BACKUP_SUFFIX`].

use crate::constants::BACKUP_SUFFIX;
use crate::error::{Error, Result};
use log::debug;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// What to do with an existing backup when a file is replaced again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackupPolicy {
    /// Always back up the current content.
    #[default]
    Overwrite,
    /// Leave an existing backup alone so it keeps the oldest content.
    Preserve,
}

/// Returns the backup path for `path`.
pub fn backup_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut name = OsString::from(path.as_ref().as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

pub fn backup_exists<P: AsRef<Path>>(path: P) -> bool {
    backup_path(path).is_file()
}

/// Copies `path` to its backup location according to `policy`.
///
/// # Returns
/// * `Result<bool>` - whether a backup was written
pub fn create_backup<P: AsRef<Path>>(path: P, policy: BackupPolicy) -> Result<bool> {
    let path = path.as_ref();
    let backup = backup_path(path);
    if policy == BackupPolicy::Preserve && backup.is_file() {
        debug!("Backup already exists for {}", path.display());
        return Ok(false);
    }

    fs::copy(path, &backup).map_err(|e| io_context(e, "back up", path))?;
    debug!("Created a backup of {} as {}", path.display(), backup.display());
    Ok(true)
}

/// Copies the backup of `path` over it. The backup itself is left in place.
///
/// # Errors
/// * `Error::BackupMissingError` if there is no backup for `path`
pub fn restore_backup<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let backup = backup_path(path);
    if !backup.is_file() {
        return Err(Error::BackupMissingError { paths: vec![path.to_path_buf()] });
    }

    fs::copy(&backup, path).map_err(|e| io_context(e, "restore", path))?;
    debug!("Restored {} from {}", path.display(), backup.display());
    Ok(())
}

pub fn remove_backup<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::remove_file(backup_path(path)).map_err(|e| io_context(e, "remove backup of", path))
}

/// Wraps an IO error with the operation and path it failed on.
pub(crate) fn io_context(err: std::io::Error, action: &str, path: &Path) -> Error {
    Error::IoError(std::io::Error::new(
        err.kind(),
        format!("failed to {} '{}': {}", action, path.display(), err),
    ))
}
