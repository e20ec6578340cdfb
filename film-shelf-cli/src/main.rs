//! film-shelf CLI
//!
//! Interactive movie renamer backed by OMDb, plus a sorter for installer
//! downloads.

mod cli_types;
mod commands;
mod console;
mod error;
mod spinner;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Rename {
            dir,
            api_key,
            omdb_url,
            next_page,
        } => commands::rename::run_rename(dir, api_key, omdb_url, &next_page, cli.quiet),
        Commands::Organize { dir, dry_run } => commands::organize::run_organize(&dir, dry_run),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Setup => commands::config::run_config_setup(),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

/// Route `log` output to stdout, interleaved with the prompts.
///
/// Normal runs print bare messages; `--verbose` adds level and target.
/// `RUST_LOG` still overrides the level chosen here.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout);
    if verbose {
        builder.format(|buf, record| {
            writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.init();
}

/// Log an empty line at info level.
pub(crate) fn log_blank() {
    log::info!("");
}
