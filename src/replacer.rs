//! Tag substitution across the configured files.

use crate::backup::{backup_path, create_backup, io_context, BackupPolicy};
use crate::config::Config;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::{debug, error, info};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Options controlling a replace run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplaceOptions {
    pub backup_policy: BackupPolicy,
    /// Restore every processed file if any file fails.
    pub atomic: bool,
}

/// Result of applying a set of replacements to a piece of text.
#[derive(Debug, PartialEq, Eq)]
pub struct Substitution {
    pub content: String,
    /// Occurrences replaced per tag, in declaration order.
    pub counts: IndexMap<String, usize>,
}

impl Substitution {
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Replaces every occurrence of each tag with its value, one tag at a time in declaration order.
/// Matching is literal and non-overlapping, scanning left to right.
pub fn replace_tags(content: &str, replacements: &IndexMap<String, String>) -> Substitution {
    let mut content = content.to_string();
    let mut counts = IndexMap::with_capacity(replacements.len());
    for (tag, value) in replacements {
        let count = content.matches(tag.as_str()).count();
        if count > 0 {
            content = content.replace(tag.as_str(), value);
        }
        counts.insert(tag.clone(), count);
    }
    Substitution { content, counts }
}

/// Outcome for a single replaced file.
#[derive(Debug)]
pub struct FileReplacement {
    pub path: PathBuf,
    pub counts: IndexMap<String, usize>,
    pub backed_up: bool,
}

impl FileReplacement {
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Outcome of a replace run.
#[derive(Debug)]
pub struct ReplaceReport {
    pub variant: String,
    pub files: Vec<FileReplacement>,
}

impl ReplaceReport {
    pub fn modified(&self) -> impl Iterator<Item = &FileReplacement> {
        self.files.iter().filter(|file| file.total() > 0)
    }
}

impl fmt::Display for ReplaceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for file in &self.files {
            if file.total() > 0 {
                writeln!(f, "Modified: '{}' ({} replacement(s))", file.path.display(), file.total())?;
            } else {
                writeln!(f, "Unchanged: '{}'", file.path.display())?;
            }
        }
        write!(
            f,
            "Variant '{}' applied to {} of {} file(s).",
            self.variant,
            self.modified().count(),
            self.files.len()
        )
    }
}

/// Pre-replace state of a file, kept in memory for atomic rollback.
struct Snapshot {
    path: PathBuf,
    content: Vec<u8>,
    backup: Option<Vec<u8>>,
}

impl Snapshot {
    fn take(path: &Path) -> Result<Self> {
        let content = fs::read(path).map_err(|e| io_context(e, "read", path))?;
        let backup_file = backup_path(path);
        let backup = if backup_file.is_file() {
            Some(fs::read(&backup_file).map_err(|e| io_context(e, "read", &backup_file))?)
        } else {
            None
        };
        Ok(Self { path: path.to_path_buf(), content, backup })
    }

    fn restore(&self) -> Result<()> {
        fs::write(&self.path, &self.content).map_err(|e| io_context(e, "roll back", &self.path))?;
        let backup_file = backup_path(&self.path);
        match &self.backup {
            Some(previous) => fs::write(&backup_file, previous)
                .map_err(|e| io_context(e, "roll back", &backup_file))?,
            None if backup_file.exists() => fs::remove_file(&backup_file)
                .map_err(|e| io_context(e, "roll back", &backup_file))?,
            None => {}
        }
        Ok(())
    }
}

/// Applies the named variant to every configured file.
///
/// # Arguments
/// * `config` - Loaded configuration
/// * `variant_name` - Name of the variant to apply
/// * `base_dir` - Directory relative file paths are resolved against
/// * `options` - Backup policy and atomic mode
///
/// # Errors
/// * `Error::UnknownVariantError` before any file is touched
/// * `Error::FileNotFoundError` for a missing target; earlier files stay modified
///   unless `options.atomic` is set
pub fn replace<P: AsRef<Path>>(
    config: &Config,
    variant_name: &str,
    base_dir: P,
    options: ReplaceOptions,
) -> Result<ReplaceReport> {
    let variant = config.variant(variant_name)?;
    let targets = config.resolve_files(base_dir);

    if options.atomic {
        if let Some(missing) = targets.iter().find(|path| !path.is_file()) {
            return Err(Error::FileNotFoundError { path: missing.clone() });
        }
    }

    let mut snapshots = Vec::new();
    let mut report = ReplaceReport { variant: variant.name.clone(), files: Vec::new() };

    for path in &targets {
        let outcome = if options.atomic {
            Snapshot::take(path).and_then(|snapshot| {
                snapshots.push(snapshot);
                replace_in_file(path, &variant.replacements, options.backup_policy)
            })
        } else {
            replace_in_file(path, &variant.replacements, options.backup_policy)
        };

        match outcome {
            Ok(file) => report.files.push(file),
            Err(err) => {
                if options.atomic {
                    rollback(&snapshots);
                }
                return Err(err);
            }
        }
    }

    Ok(report)
}

fn replace_in_file(
    path: &Path,
    replacements: &IndexMap<String, String>,
    policy: BackupPolicy,
) -> Result<FileReplacement> {
    if !path.is_file() {
        return Err(Error::FileNotFoundError { path: path.to_path_buf() });
    }

    let backed_up = create_backup(path, policy)?;
    let content = fs::read_to_string(path).map_err(|e| io_context(e, "read", path))?;
    let substitution = replace_tags(&content, replacements);

    for (tag, count) in substitution.counts.iter().filter(|(_, count)| **count > 0) {
        info!(
            "Replaced '{}' with '{}' in {} ({} occurrence(s))",
            tag,
            replacements[tag],
            path.display(),
            count
        );
    }

    if substitution.total() > 0 {
        fs::write(path, &substitution.content).map_err(|e| io_context(e, "write", path))?;
        debug!("Modified content saved to {}", path.display());
    } else {
        info!("No tags found in {}, skipping save", path.display());
    }

    Ok(FileReplacement { path: path.to_path_buf(), counts: substitution.counts, backed_up })
}

fn rollback(snapshots: &[Snapshot]) {
    for snapshot in snapshots.iter().rev() {
        match snapshot.restore() {
            Ok(()) => debug!("Rolled back {}", snapshot.path.display()),
            Err(e) => error!("{}", e),
        }
    }
}
