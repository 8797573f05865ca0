//! Restores configured files from their backups.

use crate::backup::{backup_exists, remove_backup, restore_backup};
use crate::config::Config;
use crate::error::{Error, Result};
use log::{error, info, warn};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default)]
pub struct RevertOptions {
    /// Delete each backup once its file has been restored.
    pub remove_backups: bool,
}

#[derive(Debug, Default)]
pub struct RevertReport {
    pub restored: Vec<PathBuf>,
}

impl fmt::Display for RevertReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for path in &self.restored {
            writeln!(f, "Reverted: '{}'", path.display())?;
        }
        write!(f, "Reverted {} file(s).", self.restored.len())
    }
}

/// Restores every configured file from its backup.
///
/// Files without a backup, or whose restore fails, do not stop the run: every other file
/// is still restored. Afterwards a single `Error::BackupMissingError` lists the files that
/// had no backup, or `Error::RevertError` lists those plus the files that failed to restore.
pub fn revert<P: AsRef<Path>>(
    config: &Config,
    base_dir: P,
    options: RevertOptions,
) -> Result<RevertReport> {
    let mut report = RevertReport::default();
    let mut missing = Vec::new();
    let mut failed = Vec::new();

    for path in config.resolve_files(base_dir) {
        if !backup_exists(&path) {
            warn!("No backup found for {}", path.display());
            missing.push(path);
            continue;
        }

        let restored = restore_backup(&path).and_then(|()| {
            if options.remove_backups {
                remove_backup(&path)
            } else {
                Ok(())
            }
        });
        match restored {
            Ok(()) => {
                info!("Reverted changes for {}", path.display());
                report.restored.push(path);
            }
            Err(e) => {
                error!("{}", e);
                failed.push((path, e.to_string()));
            }
        }
    }

    match (missing.is_empty(), failed.is_empty()) {
        (true, true) => Ok(report),
        (false, true) => Err(Error::BackupMissingError { paths: missing }),
        _ => Err(Error::RevertError { missing, failed }),
    }
}
