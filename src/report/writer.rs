//! Edge-distance report generation.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::graph::{haversine, Graph};

/// Failures while writing a distance report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A listed node has no recorded coordinates.
    #[error("no coordinates recorded for node: {0}")]
    MissingLocation(String),

    /// The underlying writer failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Writes one line per directed edge, of the form
/// `"<city> to <neighbor>: <distance> km"` with two decimals, where the
/// distance is the great-circle distance between the two nodes'
/// coordinates (not the stored edge weight).
///
/// Nodes are visited in sorted order, neighbors likewise, so the output
/// is deterministic. An undirected graph lists every edge twice, once
/// per direction.
pub fn write_edge_distances<N, W>(graph: &Graph<N>, out: &mut W) -> Result<(), ReportError>
where
    N: Clone + Ord + Display,
    W: Write,
{
    for city in graph.nodes() {
        for neighbor in graph.neighbors(&city) {
            let from = graph
                .location(&city)
                .ok_or_else(|| ReportError::MissingLocation(city.to_string()))?;
            let to = graph
                .location(neighbor)
                .ok_or_else(|| ReportError::MissingLocation(neighbor.to_string()))?;
            let distance = haversine(from, to);
            writeln!(out, "{city} to {neighbor}: {distance:.2} km")?;
        }
    }
    Ok(())
}

/// Writes the edge-distance report to a file, creating or truncating it.
pub fn write_edge_distances_to_path<N>(
    graph: &Graph<N>,
    path: impl AsRef<Path>,
) -> Result<(), ReportError>
where
    N: Clone + Ord + Display,
{
    let mut out = BufWriter::new(File::create(path)?);
    write_edge_distances(graph, &mut out)?;
    out.flush()?;
    Ok(())
}
