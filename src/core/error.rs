use std::io;
use thiserror::Error;

/// Unified error type for the shopscout application
#[derive(Error, Debug)]
pub enum ScoutError {
    /// Backend answered with a non-success status
    #[error("API error: {0}")]
    Api(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// User input errors
    #[error("Input error: {0}")]
    Input(String),

    /// IO-related errors
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Network-related errors
    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ScoutError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ScoutError::Network(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            ScoutError::Network(format!("Connection failed: {}", err))
        } else if err.is_status() {
            ScoutError::Api(format!("API returned error status: {}", err))
        } else if err.is_decode() {
            ScoutError::Serialization(format!("Malformed response body: {}", err))
        } else {
            ScoutError::Network(format!("Request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for ScoutError {
    fn from(err: serde_json::Error) -> Self {
        ScoutError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<serde_yml::Error> for ScoutError {
    fn from(err: serde_yml::Error) -> Self {
        ScoutError::Serialization(format!("YAML error: {}", err))
    }
}

/// Outcome of a search that did not produce a catalog.
///
/// `EmptyQuery` and `InFlight` are local rejections and are never shown to
/// the user; the other two are user-visible and recoverable by searching
/// again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search query is empty")]
    EmptyQuery,

    #[error("A search is already in progress")]
    InFlight,

    #[error("No products found.")]
    NoResults,

    #[error("Could not reach the server.")]
    Transport(String),
}

impl SearchError {
    /// Whether the error should be shown to the user.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, SearchError::NoResults | SearchError::Transport(_))
    }
}

/// Errors raised by catalog mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Recommended index {index} is outside catalog of {len} items")]
    OutOfRange { index: i64, len: usize },
}
