//! Error types for loading published summaries
//!
//! Rendering itself is total and has no error type. Everything that can fail
//! lives on the retrieval side: reading the summaries directory and decoding
//! the JSON records the publishing step writes there.

use std::io;

use thiserror::Error;

/// Errors that can occur while loading a summary index or record
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Reading a summary file failed
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    /// A summary file is not valid JSON for the expected shape
    #[error("Malformed summary data in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// The index referenced a file name that escapes the summaries directory
    #[error("Invalid summary file name: {0}")]
    InvalidFileName(String),
    /// No record exists for the requested week
    #[error("No summary published for week starting {0}")]
    NotFound(String),
}

impl SummaryError {
    /// Get a stable numeric code, useful for status pages and logs
    pub fn code(&self) -> u32 {
        match self {
            SummaryError::Io { .. } => 1,
            SummaryError::Json { .. } => 2,
            SummaryError::InvalidFileName(_) => 3,
            SummaryError::NotFound(_) => 4,
        }
    }

    /// Whether the error means "nothing there" rather than "broken"
    pub fn is_not_found(&self) -> bool {
        match self {
            SummaryError::NotFound(_) => true,
            SummaryError::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
