use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use film_shelf_lib::settings;
use film_shelf_lib::{NamingRules, PosterOutcome, RenameProgress, RenameSummary, rename_directory};
use film_shelf_omdb::{OmdbClient, OmdbConfig};

use crate::CliError;
use crate::console::{ConsoleOperator, prompt};
use crate::spinner::Spinning;

pub(crate) fn run_rename(
    dir: Option<PathBuf>,
    api_key: Option<String>,
    omdb_url: Option<String>,
    next_page: &str,
    quiet: bool,
) -> Result<(), CliError> {
    let dir = match dir {
        Some(dir) => dir,
        None => ask_for_directory()?,
    };
    if !dir.is_dir() {
        return Err(CliError::other(format!(
            "{} is not a directory",
            dir.display()
        )));
    }
    if let Err(e) = settings::save_last_directory(&dir.to_string_lossy()) {
        log::warn!("Could not remember {}: {}", dir.display(), e);
    }

    let config = OmdbConfig::load()?.with_overrides(omdb_url, api_key);
    if config.api_key.is_none() {
        log::warn!(
            "{}",
            "No OMDb API key configured; run 'film-shelf config setup' if searches are refused."
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    let client = OmdbClient::new(&config)
        .map_err(|e| CliError::lookup(format!("Failed to create OMDb client: {}", e)))?;

    let lookup = Spinning::new(&client, quiet);
    let posters = Spinning::new(&client, quiet);
    let mut operator = ConsoleOperator::stdio(next_page);
    let rules = NamingRules::default().with_next_page(next_page);

    log::info!(
        "Renaming movies in: {}",
        dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    let summary = rename_directory(
        &dir,
        &lookup,
        &posters,
        &mut operator,
        &rules,
        &|progress: RenameProgress| report_progress(&dir, progress),
    )?;

    crate::log_blank();
    print_summary(&summary);
    Ok(())
}

/// Prompt for the directory, offering the remembered one as the default.
fn ask_for_directory() -> Result<PathBuf, CliError> {
    let last = settings::load_last_directory();
    let answer = prompt(&format!("Directory with files for renaming ({}): ", last));
    let chosen = match answer {
        Some(a) if !a.is_empty() => a,
        _ => last,
    };
    if chosen.is_empty() {
        return Err(CliError::other("No directory given"));
    }
    Ok(PathBuf::from(chosen))
}

fn report_progress(dir: &Path, progress: RenameProgress) {
    match progress {
        RenameProgress::Scanning { file_count } => {
            log::info!("Found {} files", file_count);
        }
        RenameProgress::Processing {
            file_name,
            file_index,
            total,
        } => {
            log::debug!("[{}/{}] {}", file_index + 1, total, file_name);
        }
        RenameProgress::FetchingPoster { file_name, url } => {
            log::debug!("Fetching poster for {} from {}", file_name, url);
        }
        RenameProgress::Renamed { file_name, outcome } => {
            let target = outcome.target.strip_prefix(dir).unwrap_or(&outcome.target);
            log::info!(
                "  {} {} \u{2192} {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                file_name,
                target.display(),
            );
            match outcome.poster {
                PosterOutcome::Saved(path) => log::debug!("Poster saved to {}", path.display()),
                PosterOutcome::NotAvailable => {
                    log::warn!("  No poster available for {}", target.display());
                }
                PosterOutcome::Failed(msg) => {
                    log::warn!(
                        "  {} Poster for {} not saved: {}",
                        "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                        target.display(),
                        msg,
                    );
                }
            }
        }
        RenameProgress::Skipped { file_name } => {
            log::info!(
                "  {}",
                format!("Skipped {}", file_name).if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        RenameProgress::Conflict { file_name, folder } => {
            log::error!(
                "  {} {} already exists, {} left alone",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                folder.strip_prefix(dir).unwrap_or(&folder).display(),
                file_name,
            );
        }
        RenameProgress::Failed { file_name, error } => {
            log::error!(
                "  {} {}: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                file_name,
                error,
            );
        }
        RenameProgress::Done => {}
    }
}

fn print_summary(summary: &RenameSummary) {
    log::info!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {} {} files renamed",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.renamed,
    );
    if summary.skipped > 0 {
        log::info!(
            "  {} {} skipped",
            "-".if_supports_color(Stdout, |t| t.dimmed()),
            summary.skipped,
        );
    }
    if summary.missing_posters > 0 {
        log::warn!(
            "  {} {} without a poster",
            "?".if_supports_color(Stdout, |t| t.yellow()),
            summary.missing_posters,
        );
    }
    for failure in &summary.poster_failures {
        log::warn!(
            "  {} {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            failure,
        );
    }
    for conflict in &summary.conflicts {
        log::warn!(
            "  {} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            conflict,
        );
    }
    for error in &summary.errors {
        log::error!(
            "  {} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            error,
        );
    }
}
