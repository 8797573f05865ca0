//! TagSwap's main application entry point.
//! Parses arguments, loads the configuration and runs the requested action.

use tagswap::{
    action::dispatch,
    cli::{get_args, Args},
    config::load_config,
    error::{default_error_handler, Result},
    logger::init_logger,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the base directory and action options
/// 2. Loads and validates the configuration
/// 3. Dispatches the action and prints its outcome
fn run(args: Args) -> Result<()> {
    let request = args.to_request()?;
    let config = load_config(&args.config)?;

    let outcome = dispatch(&config, &request)?;
    println!("{outcome}");
    Ok(())
}
