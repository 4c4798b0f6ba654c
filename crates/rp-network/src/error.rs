//! Network construction and lookup errors.

use thiserror::Error;

use rp_core::LocationId;

/// Errors produced by `rp-network`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("location id {0} already exists")]
    DuplicateId(LocationId),

    #[error("location code {0:?} already exists")]
    DuplicateCode(String),

    #[error("location {0} not found in network")]
    LocationNotFound(LocationId),

    #[error("location code {0:?} not found in network")]
    CodeNotFound(String),

    #[error("road {from} -> {to} has no walking time")]
    InvalidWalkingTime { from: LocationId, to: LocationId },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
