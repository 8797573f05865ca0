//! Command-line interface implementation for TagSwap.
//! Provides argument parsing and help text formatting using clap.

use crate::action::{Action, Request};
use crate::backup::BackupPolicy;
use crate::error::{Error, Result};
use crate::replacer::ReplaceOptions;
use crate::reverter::RevertOptions;
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

fn parse_action(s: &str) -> std::result::Result<Action, String> {
    s.parse()
}

/// Command-line arguments structure for TagSwap.
#[derive(Parser, Debug)]
#[command(author, version, about = "TagSwap: reversible tag substitution across files", long_about = None)]
pub struct Args {
    /// Path to the configuration file (JSON or YAML)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Action to perform: replace, revert or summarize (case-insensitive)
    #[arg(value_name = "ACTION", value_parser = parse_action)]
    pub action: Action,

    /// Variant whose replacements are applied (required for `replace`)
    #[arg(value_name = "VARIANT")]
    pub variant: Option<String>,

    /// Directory that relative file paths in the configuration are resolved against.
    /// Defaults to the current working directory.
    #[arg(short, long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Roll back every processed file if replacing any file fails
    #[arg(long)]
    pub atomic: bool,

    /// Keep existing backups instead of overwriting them on replace
    #[arg(long)]
    pub keep_backups: bool,

    /// Delete backups after a successful revert
    #[arg(long)]
    pub remove_backups: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Parses `itr` and checks that `replace` was given a variant.
    pub fn try_parse_args<I, T>(itr: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Self::try_parse_from(itr)?;
        if args.action == Action::Replace && args.variant.is_none() {
            return Err(Self::command().error(
                ErrorKind::MissingRequiredArgument,
                "the replace action requires a <VARIANT>",
            ));
        }
        Ok(args)
    }

    /// Builds the action request, resolving the default base directory.
    pub fn to_request(&self) -> Result<Request> {
        let base_dir = match &self.base_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(Error::IoError)?,
        };

        let mut request = Request::new(self.action, base_dir);
        request.variant = self.variant.clone();
        request.replace = ReplaceOptions {
            backup_policy: if self.keep_backups {
                BackupPolicy::Preserve
            } else {
                BackupPolicy::Overwrite
            },
            atomic: self.atomic,
        };
        request.revert = RevertOptions { remove_backups: self.remove_backups };
        Ok(request)
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
