//! Weighted graphs with geographic coordinates.
//!
//! [`Graph`] stores optionally-directed weighted edges in an adjacency
//! map, plus a latitude/longitude position per node. The position data
//! feeds [`Graph::heuristic`], the great-circle estimate used by the
//! informed search strategies in [`crate::search`].

mod adjacency;
mod geo;

pub use adjacency::Graph;
pub use geo::{haversine, Coord};
