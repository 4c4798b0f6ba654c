use thiserror::Error;

use rp_network::NetworkError;

/// Errors that abort a planning request.
///
/// An unreachable destination is *not* an error: searches report it as
/// `Ok(None)` and planners as empty results.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("network lookup failed: {0}")]
    Network(#[from] NetworkError),
}

pub type PlanResult<T> = Result<T, PlanError>;
