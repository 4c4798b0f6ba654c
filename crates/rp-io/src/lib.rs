//! `rp-io`: adapters between text files and the planner.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`loader`]   | `load_network`, `load_locations_reader`, `load_distances_reader` |
//! | [`request`]  | `parse_request`, `detect_kind`                            |
//! | [`writer`]   | `write_outcome`, `write_outcome_file`                     |
//! | [`error`]    | `IoError`, `IoResult<T>`                                  |
//!
//! # Usage
//!
//! ```rust,ignore
//! use rp_io::{load_network, parse_request, write_outcome_file};
//! use rp_planner::{PlannerConfig, RequestKind, RoutePlanner};
//!
//! let network = load_network(Path::new("Locations.csv"), Path::new("Distances.csv"))?;
//! let planner = RoutePlanner::new(&network, PlannerConfig::default());
//! let request = parse_request(&std::fs::read_to_string("input.txt")?, RequestKind::Driving)?;
//! let outcome = planner.plan(&request)?;
//! write_outcome_file(Path::new("output.txt"), &request, &outcome, 2)?;
//! ```

pub mod error;
pub mod loader;
pub mod request;
pub mod writer;


pub use error::{IoError, IoResult};
pub use loader::{load_distances_reader, load_locations_reader, load_network, load_network_readers};
pub use request::{detect_kind, parse_request};
pub use writer::{write_outcome, write_outcome_file};
