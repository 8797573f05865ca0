//! TagSwap rewrites a configured list of files by replacing literal tags with the
//! values of a named variant, keeping a backup of each file so the change can be reverted.

/// Action selection and dispatch (replace, revert, summarize)
pub mod action;

/// Backup naming convention and copy/restore helpers
pub mod backup;

/// Command-line interface module for the TagSwap application
pub mod cli;

/// Configuration loading and validation
/// Supports JSON and YAML documents
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the TagSwap application
pub mod error;

pub mod logger;

/// Literal tag substitution across the configured files
pub mod replacer;

/// Restoring files from their backups
pub mod reverter;

/// Read-only overview of a configuration
pub mod summary;
