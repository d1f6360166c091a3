//! Hill Climbing Search.
//!
//! Local search that always takes the cheapest outgoing edge, with three
//! escape mechanisms layered on top: a global `tried` memory that blocks
//! re-entering abandoned nodes, skipping of neighbors that are dead ends
//! (a single neighbor of their own), and backtracking along the current
//! path when no candidate remains. Arriving back at the start resets the
//! path and cost accounting but keeps the `tried` memory, so a fresh
//! branch is attempted. No optimality guarantee.

use std::fmt::Display;

use super::agent::SearchAgent;
use super::types::{Route, SearchError};

impl<N: Clone + Ord + Display> SearchAgent<'_, N> {
    /// Runs Hill Climbing Search from start to goal.
    ///
    /// Exhausting the backtrack stack is [`SearchError::NoPathFound`].
    pub fn hill_climbing(&self) -> Result<Route<N>, SearchError> {
        let start = self.start();
        let goal = self.goal();

        let mut current = start.clone();
        let mut path = vec![current.clone()];
        let mut cost = 0.0;
        let mut tried: Vec<N> = Vec::new();

        while current != *goal {
            let mut neighbors: Vec<N> = self.graph().neighbors(&current).cloned().collect();

            // Back at the start: drop branches already tried and restart
            // the path and cost accounting. The tried memory persists.
            if current == *start {
                let before = neighbors.len();
                neighbors.retain(|n| !tried.contains(n));
                if neighbors.len() < before {
                    cost = 0.0;
                    path = vec![start.clone()];
                }
            }

            let mut best_cost = f64::INFINITY;
            let mut best_neighbor: Option<N> = None;

            for neighbor in &neighbors {
                // The goal wins outright, even if previously tried.
                if neighbor == goal {
                    best_cost = self
                        .graph()
                        .cost(&current, neighbor)
                        .ok_or_else(|| SearchError::missing_edge(&current, neighbor))?;
                    best_neighbor = Some(neighbor.clone());
                    break;
                }

                if tried.contains(neighbor) || path.contains(neighbor) {
                    continue;
                }

                // A neighbor with a single neighbor of its own is a dead
                // end; stepping in would force an immediate backtrack.
                if self.graph().neighbors(neighbor).count() == 1 {
                    continue;
                }

                let next_cost = self
                    .graph()
                    .cost(&current, neighbor)
                    .ok_or_else(|| SearchError::missing_edge(&current, neighbor))?;
                if next_cost < best_cost {
                    best_cost = next_cost;
                    best_neighbor = Some(neighbor.clone());
                }
            }

            match best_neighbor {
                Some(best) => {
                    tried.push(best.clone());
                    current = best.clone();
                    path.push(best);
                    cost += best_cost;
                }
                None => {
                    tried.push(current.clone());
                    path.pop();
                    match path.last() {
                        Some(previous) => current = previous.clone(),
                        // Backtracked past the start: nothing left to try.
                        None => return Err(SearchError::NoPathFound),
                    }
                }
            }
        }

        Ok(Route { path, cost })
    }
}
