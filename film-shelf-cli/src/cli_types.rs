//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "film-shelf")]
#[command(about = "Sort movie files into titled folders with artwork", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Look up each movie file on OMDb and move it into "<Title> (<Year>)/"
    Rename {
        /// Directory with files for renaming (prompts when omitted)
        dir: Option<PathBuf>,

        /// OMDb API key (overrides env and config file)
        #[arg(long)]
        api_key: Option<String>,

        /// OMDb endpoint URL (overrides env and config file)
        #[arg(long)]
        omdb_url: Option<String>,

        /// Answer that requests the next page of results
        #[arg(long, default_value = film_shelf_core::DEFAULT_NEXT_PAGE, value_parser = parse_next_page_token)]
        next_page: String,
    },

    /// Move setup_<game>_<version> installers into per-game folders
    Organize {
        /// Directory containing the installers
        dir: PathBuf,

        /// Show planned moves without executing
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Manage OMDb service configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and their sources
    Show,

    /// Interactively set up the OMDb config file
    Setup,

    /// Print the config file path
    Path,
}

/// The next-page token is checked before skip (`0`), numeric selection and
/// blank input, so it must not look like any of them.
fn parse_next_page_token(raw: &str) -> Result<String, String> {
    let token = raw.trim();
    if token.is_empty() {
        return Err("the next-page token cannot be empty".to_string());
    }
    if token.parse::<i64>().is_ok() {
        return Err(format!(
            "the next-page token cannot be a number (got {:?})",
            token
        ));
    }
    Ok(token.to_string())
}

#[cfg(test)]
#[path = "tests/cli_types_tests.rs"]
mod tests;
