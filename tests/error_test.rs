use std::io;
use std::path::PathBuf;

use tagswap::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::UnknownVariantError { variant: "staging".to_string() };
    assert_eq!(err.to_string(), "Variant 'staging' not found in the configuration.");

    let err = Error::FileNotFoundError { path: PathBuf::from("src/config.h") };
    assert_eq!(err.to_string(), "File not found: 'src/config.h'.");

    let err = Error::MissingVariantError { action: "replace".to_string() };
    assert_eq!(err.to_string(), "A variant name is required for the 'replace' action.");
}

#[test]
fn test_backup_missing_lists_every_path() {
    let err = Error::BackupMissingError {
        paths: vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")],
    };
    assert_eq!(err.to_string(), "No backup found for: 'a.txt', 'b.txt'.");
}

#[test]
fn test_revert_error_lists_missing_and_failed() {
    let err = Error::RevertError {
        missing: vec![PathBuf::from("a.txt")],
        failed: vec![(PathBuf::from("dir"), "Is a directory".to_string())],
    };
    assert_eq!(
        err.to_string(),
        "Revert failed for: 'a.txt' (no backup), 'dir' (Is a directory)."
    );
}
