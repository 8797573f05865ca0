//! Error handling for the TagSwap application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for TagSwap operations.
///
/// This enum represents all possible errors that can occur within TagSwap.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents a missing, malformed or invalid configuration document
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The requested variant is not declared in the configuration
    #[error("Variant '{variant}' not found in the configuration.")]
    UnknownVariantError { variant: String },

    /// The replace action was invoked without a variant name
    #[error("A variant name is required for the '{action}' action.")]
    MissingVariantError { action: String },

    /// A target file listed in the configuration does not exist
    #[error("File not found: '{}'.", path.display())]
    FileNotFoundError { path: PathBuf },

    /// Revert was requested for files that have no backup
    #[error("No backup found for: {}.", format_paths(paths))]
    BackupMissingError { paths: Vec<PathBuf> },

    /// Revert could not restore some files
    #[error("Revert failed for: {}.", format_failures(missing, failed))]
    RevertError {
        missing: Vec<PathBuf>,
        failed: Vec<(PathBuf, String)>,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| format!("'{}'", p.display())).collect::<Vec<_>>().join(", ")
}

fn format_failures(missing: &[PathBuf], failed: &[(PathBuf, String)]) -> String {
    missing
        .iter()
        .map(|p| format!("'{}' (no backup)", p.display()))
        .chain(failed.iter().map(|(p, reason)| format!("'{}' ({})", p.display(), reason)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
