use thiserror::Error;

/// Errors a lookup or poster source can report.
///
/// These cover failures of the call itself. A service that answers with
/// "no results" is not an error here; that arrives as [`crate::ResultPage::error`].
#[derive(Debug, Error)]
pub enum LookupError {
    /// The request never produced a usable HTTP response
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The service answered with a non-success status
    #[error("Server error (HTTP {status}): {message}")]
    Status { status: u16, message: String },

    /// The response body could not be understood
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// Generic lookup error with message
    #[error("{0}")]
    Other(String),
}

impl LookupError {
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
