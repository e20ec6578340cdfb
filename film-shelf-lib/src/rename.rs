use std::fs;
use std::path::{Path, PathBuf};

use film_shelf_core::{
    Candidate, MovieLookup, NamingRules, Operator, PosterSource, file_extension, poster_file_name,
};

use crate::disambiguate::{Resolution, disambiguate};
use crate::error::RenameError;

/// What happened to the artwork for a renamed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PosterOutcome {
    /// Written to this path
    Saved(PathBuf),
    /// The candidate has no artwork (sentinel or missing poster)
    NotAvailable,
    /// Download or write failed; the rename itself still stands
    Failed(String),
}

/// Result of a completed rename.
#[derive(Debug, Clone)]
pub struct RenameOutcome {
    /// Destination folder, `"<Title> (<Year>)"`
    pub folder: PathBuf,
    /// Final path of the moved file
    pub target: PathBuf,
    pub poster: PosterOutcome,
}

/// Progress information for callbacks.
#[derive(Debug, Clone)]
pub enum RenameProgress {
    /// Found the files to process
    Scanning { file_count: usize },
    /// Starting on a file
    Processing {
        file_name: String,
        file_index: usize,
        total: usize,
    },
    /// Downloading artwork for a renamed file
    FetchingPoster { file_name: String, url: String },
    /// File moved into its folder
    Renamed {
        file_name: String,
        outcome: RenameOutcome,
    },
    /// Operator skipped the file
    Skipped { file_name: String },
    /// Destination folder already existed
    Conflict { file_name: String, folder: PathBuf },
    /// Creating the folder or moving the file failed
    Failed { file_name: String, error: String },
    /// Finished all files
    Done,
}

/// Summary of a rename run over a directory.
#[derive(Debug, Clone, Default)]
pub struct RenameSummary {
    pub renamed: usize,
    pub skipped: usize,
    pub missing_posters: usize,
    pub conflicts: Vec<String>,
    pub poster_failures: Vec<String>,
    pub errors: Vec<String>,
}

/// Move `dir/filename` into a folder named after `candidate` and fetch its
/// poster.
///
/// The folder is `dir/"<Title> (<Year>)"` and the file becomes
/// `"<Title>.<ext>"` inside it, both cleaned with `rules`. An existing
/// folder is a conflict and leaves everything untouched. Poster problems
/// never undo the move.
pub fn execute_rename(
    dir: &Path,
    filename: &str,
    candidate: &Candidate,
    rules: &NamingRules,
    posters: &dyn PosterSource,
) -> Result<RenameOutcome, RenameError> {
    execute_rename_with_progress(
        dir,
        filename,
        candidate,
        rules,
        posters,
        &|_: RenameProgress| {},
    )
}

fn execute_rename_with_progress(
    dir: &Path,
    filename: &str,
    candidate: &Candidate,
    rules: &NamingRules,
    posters: &dyn PosterSource,
    progress: &dyn Fn(RenameProgress),
) -> Result<RenameOutcome, RenameError> {
    let folder = dir.join(rules.folder_name(&candidate.title, &candidate.year));
    if folder.exists() {
        return Err(RenameError::conflict(folder));
    }

    let target = folder.join(rules.file_name(&candidate.title, file_extension(filename)));

    fs::create_dir(&folder)?;
    if let Err(e) = fs::rename(dir.join(filename), &target) {
        // Don't leave an empty folder behind
        if let Err(cleanup) = fs::remove_dir(&folder) {
            log::warn!(
                "Could not remove empty folder {}: {}",
                folder.display(),
                cleanup
            );
        }
        return Err(e.into());
    }

    let poster = match rules.poster_url(candidate.poster.as_deref()) {
        Some(url) => {
            progress(RenameProgress::FetchingPoster {
                file_name: filename.to_string(),
                url: url.to_string(),
            });
            save_poster(&folder, url, posters)
        }
        None => PosterOutcome::NotAvailable,
    };

    Ok(RenameOutcome {
        folder,
        target,
        poster,
    })
}

fn save_poster(folder: &Path, url: &str, posters: &dyn PosterSource) -> PosterOutcome {
    let bytes = match posters.fetch(url) {
        Ok(bytes) => bytes,
        Err(e) => return PosterOutcome::Failed(format!("download failed: {}", e)),
    };
    let path = folder.join(poster_file_name(url));
    match fs::write(&path, bytes) {
        Ok(()) => PosterOutcome::Saved(path),
        Err(e) => PosterOutcome::Failed(format!("could not write {}: {}", path.display(), e)),
    }
}

/// List the files to offer for renaming: regular, non-hidden files in
/// `dir`, sorted by name. Names that aren't valid UTF-8 are skipped.
pub fn list_movie_files(dir: &Path) -> Result<Vec<String>, RenameError> {
    let entries = fs::read_dir(dir).map_err(|e| RenameError::read_dir(dir, e))?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            log::warn!("Skipping non-UTF-8 file name {:?}", entry.file_name());
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        files.push(name);
    }
    files.sort();
    Ok(files)
}

/// Run the interactive rename over every file in `dir`, one at a time.
///
/// Each file is fully resolved (renamed, skipped, or failed) before the
/// next starts. Only a failure to list `dir` aborts the run.
pub fn rename_directory(
    dir: &Path,
    lookup: &dyn MovieLookup,
    posters: &dyn PosterSource,
    operator: &mut dyn Operator,
    rules: &NamingRules,
    progress: &dyn Fn(RenameProgress),
) -> Result<RenameSummary, RenameError> {
    let files = list_movie_files(dir)?;
    progress(RenameProgress::Scanning {
        file_count: files.len(),
    });

    let mut summary = RenameSummary::default();
    let total = files.len();

    for (file_index, file_name) in files.into_iter().enumerate() {
        progress(RenameProgress::Processing {
            file_name: file_name.clone(),
            file_index,
            total,
        });

        let candidate = match disambiguate(&file_name, lookup, operator, rules) {
            Resolution::Confirmed(candidate) => candidate,
            Resolution::Skipped => {
                summary.skipped += 1;
                progress(RenameProgress::Skipped { file_name });
                continue;
            }
        };

        match execute_rename_with_progress(dir, &file_name, &candidate, rules, posters, progress) {
            Ok(outcome) => {
                summary.renamed += 1;
                match &outcome.poster {
                    PosterOutcome::Saved(_) => {}
                    PosterOutcome::NotAvailable => summary.missing_posters += 1,
                    PosterOutcome::Failed(msg) => summary
                        .poster_failures
                        .push(format!("{}: {}", file_name, msg)),
                }
                progress(RenameProgress::Renamed { file_name, outcome });
            }
            Err(RenameError::Conflict { folder }) => {
                summary
                    .conflicts
                    .push(format!("{}: {} already exists", file_name, folder.display()));
                progress(RenameProgress::Conflict { file_name, folder });
            }
            Err(e) => {
                let error = e.to_string();
                summary.errors.push(format!("{}: {}", file_name, error));
                progress(RenameProgress::Failed { file_name, error });
            }
        }
    }

    progress(RenameProgress::Done);
    Ok(summary)
}
