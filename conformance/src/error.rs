//! Error type shared by both pipelines.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure a pipeline can raise. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Neither an ontology file nor an ontology URL was given.
    #[error("either an ontology file or an ontology URL must be specified")]
    MissingSource,

    /// The OOPS! API answered with a non-200 status.
    #[error("invalid response from OOPS API (HTTP status {status})")]
    RemoteService {
        /// HTTP status code of the response.
        status: u16,
    },

    /// The OOPS! API did not answer within the configured timeout.
    #[error("no response from OOPS API within {seconds} s")]
    Timeout {
        /// Configured timeout in seconds.
        seconds: u64,
    },

    /// Any other failure while talking to the OOPS! API.
    #[error("request to OOPS API failed: {0}")]
    Transport(String),

    /// The ontology could not be parsed, or its format is unknown.
    #[error("malformed ontology input {input}: {reason}")]
    MalformedInput {
        /// File path or format name that was rejected.
        input: String,
        /// Parser message.
        reason: String,
    },

    /// The OOPS! response body is not the expected XML document.
    #[error("malformed OOPS response: {0}")]
    MalformedResponse(String),

    /// A compliance fraction outside `[0.0, 1.0]` was given to the badge selector.
    #[error("fraction must be between 0.0 and 1.0, got {0}")]
    FractionOutOfRange(f64),

    /// Reading an input or writing an artifact failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path of the file involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed_input(input: impl Into<String>, reason: impl ToString) -> Self {
        Self::MalformedInput {
            input: input.into(),
            reason: reason.to_string(),
        }
    }
}
