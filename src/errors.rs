use std::path::PathBuf;

use thiserror::Error;

/// Failures raised at the data-loading boundary.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid date `{0}` (expected YYYY-MM-DD)")]
    InvalidDate(String),
}
