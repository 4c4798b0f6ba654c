//! `rp-core`: foundational types for the route planner.
//!
//! Every other `rp-*` crate depends on this one.  It has no `rp-*`
//! dependencies and only an optional `serde` externally.
//!
//! # What lives here
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`ids`]     | `LocationId`, `NodeIdx`, `RoadIdx`              |
//! | [`mode`]    | `TravelMode` enum                               |
//! | [`time`]    | `Minutes`, `NOT_DRIVABLE` sentinel              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod mode;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{LocationId, NodeIdx, RoadIdx};
pub use mode::TravelMode;
pub use time::{Minutes, NOT_DRIVABLE, is_drivable};
