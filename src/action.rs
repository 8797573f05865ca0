//! Selects and runs one action per invocation.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::replacer::{replace, ReplaceOptions, ReplaceReport};
use crate::reverter::{revert, RevertOptions, RevertReport};
use crate::summary::summarize;
use clap::ValueEnum;
use log::debug;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Apply a variant's replacements, backing up each file first
    Replace,
    /// Restore each file from its backup
    Revert,
    /// Print the configured files and variants
    Summarize,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Replace => "replace",
            Action::Revert => "revert",
            Action::Summarize => "summarize",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        <Action as ValueEnum>::from_str(s.trim(), true).map_err(|_| format!("Invalid action '{s}'"))
    }
}

/// Everything besides the configuration that an action needs.
#[derive(Debug, Clone)]
pub struct Request {
    pub action: Action,
    pub variant: Option<String>,
    pub base_dir: PathBuf,
    pub replace: ReplaceOptions,
    pub revert: RevertOptions,
}

impl Request {
    pub fn new<P: Into<PathBuf>>(action: Action, base_dir: P) -> Self {
        Self {
            action,
            variant: None,
            base_dir: base_dir.into(),
            replace: ReplaceOptions::default(),
            revert: RevertOptions::default(),
        }
    }

    pub fn with_variant<S: Into<String>>(mut self, variant: S) -> Self {
        self.variant = Some(variant.into());
        self
    }
}

/// What an action produced, printable for the user.
#[derive(Debug)]
pub enum Outcome {
    Replaced(ReplaceReport),
    Reverted(RevertReport),
    Summary(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Replaced(report) => write!(f, "{report}"),
            Outcome::Reverted(report) => write!(f, "{report}"),
            Outcome::Summary(summary) => write!(f, "{}", summary.trim_end()),
        }
    }
}

/// Runs the requested action against `config`.
///
/// # Errors
/// * `Error::MissingVariantError` if `replace` is requested without a variant
/// * Any error of the selected action
pub fn dispatch(config: &Config, request: &Request) -> Result<Outcome> {
    debug!("Running action '{}'", request.action);
    match request.action {
        Action::Replace => {
            let variant = request.variant.as_deref().map(str::trim).ok_or_else(|| {
                Error::MissingVariantError { action: request.action.to_string() }
            })?;
            replace(config, variant, &request.base_dir, request.replace).map(Outcome::Replaced)
        }
        Action::Revert => {
            revert(config, &request.base_dir, request.revert).map(Outcome::Reverted)
        }
        Action::Summarize => Ok(Outcome::Summary(summarize(config))),
    }
}
