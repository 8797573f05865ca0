//! Configuration handling for TagSwap.
//! This module loads the document that lists target files and named variants,
//! and validates it before any file is touched.

use crate::constants::{JSON_EXTENSION, YAML_EXTENSIONS};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A named set of tag to value replacements.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Variant {
    pub name: String,
    /// Tags in declaration order; the order is the order of substitution.
    pub replacements: IndexMap<String, String>,
}

/// The parsed configuration document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    pub files: Vec<PathBuf>,
    pub variants: Vec<Variant>,
}

impl Config {
    /// Looks up a variant by its exact name.
    pub fn variant(&self, name: &str) -> Result<&Variant> {
        self.variants
            .iter()
            .find(|variant| variant.name == name)
            .ok_or_else(|| Error::UnknownVariantError { variant: name.to_string() })
    }

    /// Resolves the configured file paths against `base_dir`, keeping their order.
    /// Absolute paths are returned unchanged.
    pub fn resolve_files<P: AsRef<Path>>(&self, base_dir: P) -> Vec<PathBuf> {
        let base_dir = base_dir.as_ref();
        self.files.iter().map(|file| base_dir.join(file)).collect()
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for variant in &self.variants {
            if !seen.insert(variant.name.as_str()) {
                return Err(Error::ConfigError(format!(
                    "Duplicate variant name '{}'",
                    variant.name
                )));
            }
            if variant.replacements.keys().any(|tag| tag.is_empty()) {
                return Err(Error::ConfigError(format!(
                    "Variant '{}' declares an empty tag",
                    variant.name
                )));
            }
        }
        Ok(())
    }
}

/// Document format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    /// Unknown extension: try JSON first, then YAML.
    Auto,
}

impl ConfigFormat {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(JSON_EXTENSION) => Self::Json,
            Some(ext) if YAML_EXTENSIONS.iter().any(|y| ext.eq_ignore_ascii_case(y)) => {
                Self::Yaml
            }
            _ => Self::Auto,
        }
    }
}

/// Reads and parses a configuration file.
///
/// # Arguments
/// * `config_path` - Path to the configuration document
///
/// # Returns
/// * `Result<Config>` - The validated configuration
///
/// # Errors
/// * `Error::ConfigError` if the file is missing, malformed, or fails validation
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<Config> {
    let config_path = config_path.as_ref();
    if !config_path.is_file() {
        return Err(Error::ConfigError(format!(
            "Config file not found: '{}'",
            config_path.display()
        )));
    }

    debug!("Loading configuration from {}", config_path.display());
    let content = std::fs::read_to_string(config_path).map_err(|e| {
        Error::ConfigError(format!("Failed to read '{}': {}", config_path.display(), e))
    })?;

    parse_config(&content, ConfigFormat::from_path(config_path)).map_err(|e| match e {
        Error::ConfigError(msg) => {
            Error::ConfigError(format!("{} in '{}'", msg, config_path.display()))
        }
        other => other,
    })
}

/// Parses and validates configuration content.
///
/// # Errors
/// * `Error::ConfigError` if parsing fails or the document is invalid
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<Config> {
    let config: Config = match format {
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid JSON configuration: {e}")))?,
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid YAML configuration: {e}")))?,
        ConfigFormat::Auto => match serde_json::from_str(content) {
            Ok(config) => config,
            Err(_) => serde_yaml::from_str(content).map_err(|e| {
                Error::ConfigError(format!("Invalid configuration format: {e}"))
            })?,
        },
    };

    config.validate()?;
    debug!(
        "Configuration has {} file(s) and {} variant(s)",
        config.files.len(),
        config.variants.len()
    );
    Ok(config)
}
