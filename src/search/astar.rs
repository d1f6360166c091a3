//! A* Search.
//!
//! Best-first over `f = g + h`, where `g` is the cheapest known cost from
//! the start and `h` the heuristic estimate to the goal. There is no
//! decrease-key: improving a node's `g` simply pushes a fresh frontier
//! entry, and stale entries re-expand harmlessly. With non-negative
//! weights and an admissible, consistent heuristic the returned cost is
//! optimal.
//!
//! # Reference
//!
//! Hart, Nilsson & Raphael (1968), "A Formal Basis for the Heuristic
//! Determination of Minimum Cost Paths".

use std::collections::BTreeMap;
use std::fmt::Display;

use super::agent::SearchAgent;
use super::frontier::Frontier;
use super::path::{calculate_cost, reconstruct_path};
use super::types::{Route, SearchError, Step};

impl<N: Clone + Ord + Display> SearchAgent<'_, N> {
    /// Runs A* Search from start to goal.
    pub fn a_star(&self) -> Result<Route<N>, SearchError> {
        let start = self.start();
        let goal = self.goal();

        let mut frontier = Frontier::new();
        frontier.put(start.clone(), 0.0);

        let mut came_from: BTreeMap<N, Option<Step<N>>> = BTreeMap::new();
        came_from.insert(start.clone(), None);

        let mut cost_so_far: BTreeMap<N, f64> = BTreeMap::new();
        cost_so_far.insert(start.clone(), 0.0);

        while let Some(current) = frontier.pop() {
            if current == *goal {
                break;
            }

            let current_cost = match cost_so_far.get(&current) {
                Some(cost) => *cost,
                None => continue,
            };

            for next in self.graph().neighbors(&current) {
                let edge_cost = self
                    .graph()
                    .cost(&current, next)
                    .ok_or_else(|| SearchError::missing_edge(&current, next))?;
                let new_cost = current_cost + edge_cost;

                if cost_so_far.get(next).is_none_or(|&known| new_cost < known) {
                    cost_so_far.insert(next.clone(), new_cost);
                    frontier.put(next.clone(), new_cost + self.heuristic(next));
                    came_from.insert(
                        next.clone(),
                        Some(Step {
                            predecessor: current.clone(),
                            edge_cost,
                        }),
                    );
                }
            }
        }

        let path = reconstruct_path(&came_from, start, goal)?;
        let cost = calculate_cost(self.graph(), &path)?;
        Ok(Route { path, cost })
    }
}
