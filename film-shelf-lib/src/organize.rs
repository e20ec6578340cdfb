//! Sort installer downloads into per-game folders.
//!
//! Installers are named `setup_<game>_<version>.<ext>`, where the game part
//! may itself contain underscores (`setup_baldurs_gate_2.5.0.3.exe`). Each
//! one moves into `<dir>/<game>/`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::OrganizeError;

/// Filename prefix token that marks an installer.
const INSTALLER_PREFIX: &str = "setup";

/// How a filename reads as an installer name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallerName {
    /// Not `setup_...`; left alone without comment
    NotInstaller,
    /// Starts with `setup_` but has no game part
    Unparseable,
    /// Game folder name
    Game(String),
}

/// Parse `setup_<game>_<version>.<ext>` into its game folder name.
///
/// The game is every `_`-separated token between the first and the last.
pub fn parse_installer_name(filename: &str) -> InstallerName {
    let sections: Vec<&str> = filename.split('_').collect();
    if sections[0] != INSTALLER_PREFIX {
        return InstallerName::NotInstaller;
    }
    if sections.len() < 3 {
        return InstallerName::Unparseable;
    }
    let game = sections[1..sections.len() - 1].join("_");
    if game.is_empty() {
        InstallerName::Unparseable
    } else {
        InstallerName::Game(game)
    }
}

/// A planned installer move.
#[derive(Debug, Clone)]
pub struct InstallerMove {
    /// Installer file
    pub source: PathBuf,
    /// Game folder it moves into
    pub folder: PathBuf,
    pub game: String,
    /// Whether the folder has to be created first
    pub create_folder: bool,
}

/// Result of planning moves for one directory.
#[derive(Debug, Default)]
pub struct InstallerPlan {
    pub moves: Vec<InstallerMove>,
    /// Installers whose game folder path is taken by a non-directory
    pub blocked: Vec<(PathBuf, String)>,
    /// `setup_` files without a game part
    pub unparseable: Vec<PathBuf>,
}

/// Summary of executing an installer plan.
#[derive(Debug, Clone, Default)]
pub struct OrganizeSummary {
    pub moved: usize,
    pub folders_created: usize,
    pub errors: Vec<String>,
}

/// Plan installer moves for the files directly inside `dir`.
///
/// Nothing on disk changes; this is also the dry-run report.
pub fn plan_installer_moves(dir: &Path) -> Result<InstallerPlan, OrganizeError> {
    let entries = fs::read_dir(dir).map_err(|e| OrganizeError::ReadDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut paths: Vec<PathBuf> = entries.flatten().map(|e| e.path()).collect();
    paths.sort();

    let mut plan = InstallerPlan::default();
    for path in paths {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !path.is_file() {
            log::debug!("Skipping {}", name);
            continue;
        }
        log::debug!("Processing {}", name);

        let game = match parse_installer_name(name) {
            InstallerName::NotInstaller => continue,
            InstallerName::Unparseable => {
                plan.unparseable.push(path);
                continue;
            }
            InstallerName::Game(game) => game,
        };

        let folder = dir.join(&game);
        if folder.exists() && !folder.is_dir() {
            plan.blocked.push((
                path,
                format!("{} exists and is not a directory", folder.display()),
            ));
            continue;
        }

        // Several installers for one game share a folder; only the first
        // creates it.
        let create_folder = !folder.exists() && !plan.moves.iter().any(|m| m.folder == folder);
        plan.moves.push(InstallerMove {
            source: path,
            folder,
            game,
            create_folder,
        });
    }

    Ok(plan)
}

/// Execute an installer plan, creating folders and moving files.
///
/// Per-file failures are collected; a file whose target name is already
/// taken inside the game folder is left where it is.
pub fn execute_installer_plan(plan: &InstallerPlan) -> OrganizeSummary {
    let mut summary = OrganizeSummary::default();

    for mv in &plan.moves {
        if !mv.folder.exists() {
            match fs::create_dir(&mv.folder) {
                Ok(()) => summary.folders_created += 1,
                Err(e) => {
                    summary.errors.push(format!(
                        "Failed to create {}: {}",
                        mv.folder.display(),
                        e
                    ));
                    continue;
                }
            }
        } else if !mv.folder.is_dir() {
            summary.errors.push(format!(
                "{} exists and is not a directory",
                mv.folder.display()
            ));
            continue;
        }

        let Some(file_name) = mv.source.file_name() else {
            continue;
        };
        let target = mv.folder.join(file_name);
        if target.exists() {
            summary
                .errors
                .push(format!("Target already exists: {}", target.display()));
            continue;
        }

        match fs::rename(&mv.source, &target) {
            Ok(()) => {
                log::info!(
                    "{} moved to {}",
                    file_name.to_string_lossy(),
                    mv.folder.display()
                );
                summary.moved += 1;
            }
            Err(e) => summary.errors.push(format!(
                "Failed to move {:?} -> {}: {}",
                file_name,
                mv.folder.display(),
                e
            )),
        }
    }

    summary
}
