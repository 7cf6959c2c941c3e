//! Command dispatch logic extracted from the binary.

use super::args::Commands;
use super::handlers::{handle_check, handle_metrics, handle_rules};
use crate::exit::LcomExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands) -> Result<LcomExit> {
    match command {
        Commands::Check(args) => handle_check(&args),
        Commands::Metrics(args) => handle_metrics(&args),
        Commands::Rules => Ok(handle_rules()),
    }
}
