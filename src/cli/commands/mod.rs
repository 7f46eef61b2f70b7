//! Command implementations for the portal CLI
//!
//! This module contains the command dispatch, progress reporting and result
//! rendering for the CLI interface. Each command lives in its own module.

pub mod card;
pub mod shared;
pub mod upload;

pub use shared::RunSummary;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Dispatches to the handler of the selected subcommand:
/// - `upload`: one upload cycle with preview
/// - `sample`: detail card of the bundled sample planet
/// - `inspect`: detail card of the first planet in a snapshot file
pub async fn run(args: Args) -> Result<RunSummary> {
    match args.command {
        Some(Commands::Upload(upload_args)) => upload::run_upload(upload_args).await,
        Some(Commands::Sample(card_args)) => card::run_sample(card_args),
        Some(Commands::Inspect(inspect_args)) => card::run_inspect(inspect_args).await,
        None => Ok(RunSummary::default()),
    }
}
