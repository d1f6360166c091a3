//! Path reconstruction and cost accumulation.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::graph::Graph;

use super::types::{SearchError, Step};

/// Walks a predecessor map backward from `goal` to `start` and returns
/// the forward path.
///
/// A goal that was never recorded, or a broken link in the chain, is a
/// [`SearchError::NoPathFound`].
pub(crate) fn reconstruct_path<N: Clone + Ord>(
    came_from: &BTreeMap<N, Option<Step<N>>>,
    start: &N,
    goal: &N,
) -> Result<Vec<N>, SearchError> {
    let mut current = goal.clone();
    let mut path = vec![current.clone()];

    while current != *start {
        match came_from.get(&current) {
            Some(Some(step)) => {
                current = step.predecessor.clone();
                path.push(current.clone());
            }
            _ => return Err(SearchError::NoPathFound),
        }
    }

    path.reverse();
    Ok(path)
}

/// Sums the edge weights along consecutive pairs of `path`.
///
/// Every consecutive pair must be an edge of the graph; a missing one is
/// a [`SearchError::MissingEdge`].
pub(crate) fn calculate_cost<N: Clone + Ord + Display>(
    graph: &Graph<N>,
    path: &[N],
) -> Result<f64, SearchError> {
    let mut cost = 0.0;
    for pair in path.windows(2) {
        cost += graph
            .cost(&pair[0], &pair[1])
            .ok_or_else(|| SearchError::missing_edge(&pair[0], &pair[1]))?;
    }
    Ok(cost)
}
