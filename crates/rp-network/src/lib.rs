//! `rp-network`: location store and road network.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`network`] | `Location`, `Road`, `RoadNetwork` (CSR), `RoadNetworkBuilder` |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                         |
//!
//! # Lifecycle
//!
//! Construction goes through [`RoadNetworkBuilder`]; [`RoadNetworkBuilder::build`]
//! freezes the graph into an immutable [`RoadNetwork`].  Searches only ever see
//! the frozen form, so no search can observe a half-built graph.

pub mod error;
pub mod network;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use network::{Location, Road, RoadNetwork, RoadNetworkBuilder};
