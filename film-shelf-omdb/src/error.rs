use film_shelf_core::LookupError;

/// Errors that can occur while talking to OMDb.
#[derive(Debug, thiserror::Error)]
pub enum OmdbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<OmdbError> for LookupError {
    fn from(e: OmdbError) -> Self {
        match e {
            OmdbError::Http(e) => LookupError::http(e.to_string()),
            OmdbError::ServerError { status, message } => LookupError::Status { status, message },
            OmdbError::Api(msg) => LookupError::malformed(msg),
            OmdbError::Json(e) => LookupError::malformed(e.to_string()),
            other => LookupError::other(other.to_string()),
        }
    }
}
