//! Workflows behind the `film-shelf` CLI: interactive movie matching and
//! renaming, installer sorting, and the remembered working directory.

pub mod disambiguate;
pub mod error;
pub mod organize;
pub mod rename;
pub mod settings;

pub use disambiguate::{Choice, Resolution, disambiguate, disambiguate_from, interpret_choice};
pub use error::{OrganizeError, RenameError};
pub use organize::{
    InstallerMove, InstallerName, InstallerPlan, OrganizeSummary, execute_installer_plan,
    parse_installer_name, plan_installer_moves,
};
pub use rename::{
    PosterOutcome, RenameOutcome, RenameProgress, RenameSummary, execute_rename, list_movie_files,
    rename_directory,
};

// Re-export the core types callers need alongside the workflows.
pub use film_shelf_core::{
    Candidate, LookupError, MovieLookup, NamingRules, Operator, PosterSource, QueryState,
    ResultPage,
};
