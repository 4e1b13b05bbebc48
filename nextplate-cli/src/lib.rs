//! Command-line interface for nextplate restaurant location recommendations.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod query;
mod report;

pub use error::CliError;

use query::{OverlaysArgs, RecommendArgs};

const ARG_DATA_DIR: &str = "data-dir";
const ARG_DISTRICT: &str = "district";
const ARG_CATEGORY: &str = "category";
const ARG_SUB_CATEGORY: &str = "sub-category";
const ARG_COMPETITORS: &str = "competitors";
const ARG_POPULARITY: &str = "popularity";
const ARG_SATISFACTION: &str = "satisfaction";
const ARG_CITY: &str = "city";
const ENV_RECOMMEND_DATA_DIR: &str = "NEXTPLATE_CMDS_RECOMMEND_DATA_DIR";
const ENV_OVERLAYS_DATA_DIR: &str = "NEXTPLATE_CMDS_OVERLAYS_DATA_DIR";
const DEFAULT_CITY: &str = "Geneva";

/// Run the nextplate CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// dataset cannot be loaded, scoring fails or output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            err.print().map_err(CliError::WriteOutput)?;
            return Ok(());
        }
        Err(err) => return Err(CliError::ArgumentParsing(err)),
    };
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Recommend(args) => report::run_recommend(args, &mut stdout),
        Command::Overlays(args) => report::run_overlays(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nextplate",
    about = "Find promising locations for a new restaurant",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the best and worst clusters for a selection.
    Recommend(RecommendArgs),
    /// Build map overlays for a selection.
    Overlays(OverlaysArgs),
}

#[cfg(test)]
mod tests;
