use std::path::PathBuf;

use thiserror::Error;

/// Errors from the rename/fetch executor and the directory driver.
#[derive(Debug, Error)]
pub enum RenameError {
    /// The destination folder is already there; nothing was touched
    #[error("{} already exists", .folder.display())]
    Conflict { folder: PathBuf },

    /// The working directory could not be listed
    #[error("Cannot read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while creating the folder or moving the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenameError {
    pub fn conflict(folder: impl Into<PathBuf>) -> Self {
        Self::Conflict {
            folder: folder.into(),
        }
    }

    pub fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }
}

/// Errors from planning installer moves.
#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("Cannot read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
