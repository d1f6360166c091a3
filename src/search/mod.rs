//! Informed search strategies over a weighted graph.
//!
//! A [`SearchAgent`] binds a borrowed [`crate::graph::Graph`] to one
//! `(start, goal)` pair, precomputes the heuristic table, and then runs
//! any of four strategies on demand:
//!
//! - **Greedy Best-First**: follows the heuristic alone, expanding a
//!   single best neighbor per step. Fast, incomplete.
//! - **A***: orders the frontier by `g + h`; optimal with an admissible
//!   heuristic.
//! - **Hill Climbing**: cheapest-edge local search with backtracking,
//!   global tried-memory, and dead-end pruning.
//! - **Simulated Annealing**: temperature-driven random walk, best of
//!   several restarts, reproducible through a seed or injected generator.
//!
//! Every strategy returns `Result<Route, SearchError>`; failing to reach
//! the goal is a [`SearchError::NoPathFound`] value, never a panic.

mod agent;
mod annealing;
mod astar;
mod frontier;
mod greedy;
mod hill;
mod path;
mod types;

pub use agent::SearchAgent;
pub use annealing::{AnnealingConfig, AnnealingOutcome};
pub use frontier::Frontier;
pub use types::{Route, SearchError, Step, Strategy};
