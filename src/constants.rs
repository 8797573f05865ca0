//! Common constants used throughout the TagSwap application.

/// Suffix appended to a target file's path to name its backup
pub const BACKUP_SUFFIX: &str = ".bak";

/// Extensions parsed as YAML configuration documents
pub const YAML_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// Extension parsed strictly as a JSON configuration document
pub const JSON_EXTENSION: &str = "json";
