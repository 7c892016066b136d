// Error types for the wkstats application.
// Covers WaniKani API errors, cache errors, and general application errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WkError {
    #[error("WaniKani API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("HTTP {status} from {endpoint}")]
    Http { endpoint: String, status: u16 },

    #[error("Malformed response from {endpoint}: missing `pages` field")]
    MalformedResponse { endpoint: String },

    #[error("Pagination exceeded {max} pages for {endpoint}")]
    PageLimitExceeded { endpoint: String, max: usize },

    #[error("Missing WANIKANI_TOKEN environment variable")]
    MissingToken,

    #[error("No cached data for {endpoint} (expected at {path:?}); fetch it first")]
    CacheMiss { endpoint: String, path: PathBuf },

    #[error("Cache file {path:?} is not valid JSON: {source}")]
    CacheCorrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, WkError>;
