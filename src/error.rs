// src/error.rs
// =============================================================================
// Error types for the sync pipeline.
//
// Every failure is fatal to the run: main() prints the message and exits
// with status 1. The variants group into three families:
// - fetching: Fetch (transport) and Status (non-2xx response)
// - parsing:  Parse (response body is not JSON)
// - writing:  Write and Serialize
// plus DuplicateExamples and UnknownMethod, raised while building the
// example table.
// =============================================================================

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// The request never produced a response (DNS, connect, timeout, body read)
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: StatusCode },

    /// The response body is not a JSON document
    #[error("response from {url} is not valid JSON: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The destination could not be written or replaced
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize OpenAPI document: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The same (path, method) appears twice in the example table
    #[error("duplicate code samples for {method} {path}")]
    DuplicateExamples { path: String, method: String },

    /// A table entry names something that is not an OpenAPI operation key
    #[error("unknown HTTP method '{method}' for {path} in code sample table")]
    UnknownMethod { path: String, method: String },
}

impl SyncError {
    /// True for failures while downloading or parsing the document,
    /// which always happen before anything is written
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            SyncError::Fetch { .. } | SyncError::Status { .. } | SyncError::Parse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
