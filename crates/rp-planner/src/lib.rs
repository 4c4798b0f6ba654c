//! `rp-planner`: route search and planning strategies.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`avoid`]      | `BlockedNodes`, `BlockedEdges`, `Avoid`                    |
//! | [`search`]     | `PathSearch` trait, `Path`, `Dijkstra`                     |
//! | [`restricted`] | `best_and_alternate`, `route_via`, `restricted_route`      |
//! | [`multimodal`] | `plan_park_and_walk`, `ParkAndWalk`, `ParkAndWalkPlan`     |
//! | [`planner`]    | `RoutePlanner`, `PlanRequest`, `PlanOutcome`               |
//! | [`config`]     | `PlannerConfig`                                            |
//! | [`error`]      | `PlanError`, `PlanResult<T>`                               |
//!
//! # Chaining protocol
//!
//! A search never mutates what it is given.  Every [`Path`] carries the set of
//! directed edges it used; a caller that wants the next search to avoid them
//! merges that set explicitly, either by hand ([`Avoid::block_path`]) or via
//! [`PathSearch::search_blocking`].  Alternate routes and the two legs of a
//! park-and-walk plan are both built on this.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Evaluates park-and-walk candidates on Rayon's pool.     |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `PlannerConfig`.   |

pub mod avoid;
pub mod config;
pub mod error;
pub mod multimodal;
pub mod planner;
pub mod restricted;
pub mod search;


pub use avoid::{Avoid, BlockedEdges, BlockedNodes};
pub use config::PlannerConfig;
pub use error::{PlanError, PlanResult};
pub use multimodal::{plan_park_and_walk, ParkAndWalk, ParkAndWalkPlan};
pub use planner::{PlanOutcome, PlanRequest, RequestKind, RoutePlanner};
pub use restricted::{best_and_alternate, restricted_route, route_via, RoutePair};
pub use search::{Dijkstra, Path, PathSearch};
