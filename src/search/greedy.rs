//! Greedy Best-First Search.
//!
//! Expands toward whichever node looks closest to the goal according to
//! the heuristic alone, ignoring accumulated path cost. This variant
//! commits to a single neighbor per expansion: among the unvisited
//! neighbors of the popped node, only the one with the lowest heuristic
//! enters the frontier. That restriction makes the search cheaper but
//! incomplete on some graphs, which callers observe as
//! [`SearchError::NoPathFound`].

use std::collections::BTreeMap;
use std::fmt::Display;

use super::agent::SearchAgent;
use super::frontier::Frontier;
use super::path::{calculate_cost, reconstruct_path};
use super::types::{Route, SearchError, Step};

impl<N: Clone + Ord + Display> SearchAgent<'_, N> {
    /// Runs Greedy Best-First Search from start to goal.
    pub fn greedy_best_first(&self) -> Result<Route<N>, SearchError> {
        let start = self.start();
        let goal = self.goal();

        let mut frontier = Frontier::new();
        frontier.put(start.clone(), self.heuristic(start));

        let mut came_from: BTreeMap<N, Option<Step<N>>> = BTreeMap::new();
        came_from.insert(start.clone(), None);

        while let Some(current) = frontier.pop() {
            if current == *goal {
                break;
            }

            // Single best unvisited neighbor, not the whole neighborhood.
            let mut closest: Option<&N> = None;
            for next in self.graph().neighbors(&current) {
                if came_from.contains_key(next) {
                    continue;
                }
                let better = match closest {
                    Some(best) => self.heuristic(next) < self.heuristic(best),
                    None => true,
                };
                if better {
                    closest = Some(next);
                }
            }

            if let Some(closest) = closest.cloned() {
                let edge_cost = self
                    .graph()
                    .cost(&current, &closest)
                    .ok_or_else(|| SearchError::missing_edge(&current, &closest))?;
                frontier.put(closest.clone(), self.heuristic(&closest));
                came_from.insert(
                    closest,
                    Some(Step {
                        predecessor: current.clone(),
                        edge_cost,
                    }),
                );
            }
        }

        let path = reconstruct_path(&came_from, start, goal)?;
        let cost = calculate_cost(self.graph(), &path)?;
        Ok(Route { path, cost })
    }
}
