//! Core types shared by the search strategies.

use std::fmt::Display;

use thiserror::Error;

use super::annealing::AnnealingConfig;

/// The available search strategies.
///
/// A closed enumeration: dispatch in [`crate::search::SearchAgent::search`]
/// matches exhaustively, so adding a variant is a compile-time event for
/// every caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Expand toward the single neighbor with the lowest heuristic.
    GreedyBestFirst,
    /// Best-first over `f = g + h`; optimal with an admissible heuristic.
    AStar,
    /// Cheapest-edge local search with backtracking and dead-end pruning.
    HillClimbing,
    /// Temperature-driven random walk, best of several restarts.
    SimulatedAnnealing(AnnealingConfig),
}

/// A path from start to goal and the sum of its edge weights.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<N> {
    /// Node sequence, start and goal inclusive.
    pub path: Vec<N>,

    /// Total edge cost along `path`. Zero for a single-node route.
    pub cost: f64,
}

/// One link of a predecessor map: how a node was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<N> {
    /// The node this one was expanded from.
    pub predecessor: N,

    /// Weight of the edge taken from the predecessor.
    pub edge_cost: f64,
}

/// Failures a search can report.
///
/// No-path conditions are recoverable results, never panics; unknown
/// nodes are caller errors surfaced at agent construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The requested start or goal is not a node of the graph.
    #[error("node is not part of the graph: {0}")]
    UnknownNode(String),

    /// The strategy exhausted its frontier, backtracking, or restarts
    /// without reaching the goal.
    #[error("no path between start and goal")]
    NoPathFound,

    /// An edge assumed by a path does not exist in the graph.
    #[error("missing edge: {from} -> {to}")]
    MissingEdge {
        /// Source node of the absent edge.
        from: String,
        /// Target node of the absent edge.
        to: String,
    },
}

impl SearchError {
    pub(crate) fn unknown_node(node: &impl Display) -> Self {
        Self::UnknownNode(node.to_string())
    }

    pub(crate) fn missing_edge(from: &impl Display, to: &impl Display) -> Self {
        Self::MissingEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
