use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use film_shelf_lib::{execute_installer_plan, plan_installer_moves};

use crate::CliError;

pub(crate) fn run_organize(dir: &Path, dry_run: bool) -> Result<(), CliError> {
    log::info!(
        "Organizing installers in: {}",
        dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    if dry_run {
        log::info!(
            "{}",
            "Dry run: no files will be moved".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let plan = plan_installer_moves(dir)?;

    for path in &plan.unparseable {
        log::warn!(
            "  {} {} has no game name, skipped",
            "?".if_supports_color(Stdout, |t| t.yellow()),
            file_label(path),
        );
    }
    for (path, reason) in &plan.blocked {
        log::warn!(
            "  {} {}: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            file_label(path),
            reason,
        );
    }

    if plan.moves.is_empty() {
        log::info!(
            "{}",
            "No installers to move.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    if dry_run {
        for mv in &plan.moves {
            let note = if mv.create_folder { " (new folder)" } else { "" };
            log::info!(
                "  {} \u{2192} {}/{}",
                file_label(&mv.source),
                mv.game.if_supports_color(Stdout, |t| t.cyan()),
                note.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        crate::log_blank();
        log::info!("{} installers would be moved", plan.moves.len());
        return Ok(());
    }

    let summary = execute_installer_plan(&plan);

    crate::log_blank();
    log::info!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {} {} installers moved",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.moved,
    );
    if summary.folders_created > 0 {
        log::info!(
            "  {} {} folders created",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            summary.folders_created,
        );
    }
    for error in &summary.errors {
        log::error!(
            "  {} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            error,
        );
    }

    Ok(())
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
