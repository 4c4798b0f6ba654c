//! Error types for rp-io.

use thiserror::Error;

use rp_network::NetworkError;
use rp_planner::RequestKind;

/// Errors raised while reading or writing planner files.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("request is missing required key {0:?}")]
    MissingKey(&'static str),

    #[error("network construction failed: {0}")]
    Network(#[from] NetworkError),

    #[error("cannot write a {outcome:?} outcome for a {request:?} request")]
    KindMismatch { request: RequestKind, outcome: RequestKind },
}

impl IoError {
    pub(crate) fn parse(line: u64, message: impl Into<String>) -> Self {
        IoError::Parse { line, message: message.into() }
    }
}

/// Alias for `Result<T, IoError>`.
pub type IoResult<T> = Result<T, IoError>;
