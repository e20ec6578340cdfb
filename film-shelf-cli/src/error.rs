use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Lookup service could not be reached or set up
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

impl From<film_shelf_omdb::OmdbError> for CliError {
    fn from(e: film_shelf_omdb::OmdbError) -> Self {
        match e {
            film_shelf_omdb::OmdbError::Config(msg) => Self::Config(msg),
            other => Self::Lookup(other.to_string()),
        }
    }
}

impl From<film_shelf_lib::RenameError> for CliError {
    fn from(e: film_shelf_lib::RenameError) -> Self {
        Self::Other(e.to_string())
    }
}

impl From<film_shelf_lib::OrganizeError> for CliError {
    fn from(e: film_shelf_lib::OrganizeError) -> Self {
        Self::Other(e.to_string())
    }
}
