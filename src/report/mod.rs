//! Text reports derived from a graph's coordinate data.
//!
//! The single report currently produced lists the great-circle distance
//! of every edge, mirroring the graph's own heuristic data in a
//! human-readable form.

mod writer;

pub use writer::{write_edge_distances, write_edge_distances_to_path, ReportError};
