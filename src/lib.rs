//! Informed graph search strategies.
//!
//! Provides a weighted-graph abstraction with geographic coordinates and
//! four classical path-finding strategies sharing one heuristic table:
//!
//! - **Greedy Best-First**: heuristic-only ordering, restricted to a
//!   single best neighbor per expansion.
//! - **A***: cost-plus-heuristic ordering; returns the optimal path
//!   under an admissible, consistent heuristic.
//! - **Hill Climbing**: cheapest-edge local search with backtracking
//!   and dead-end pruning.
//! - **Simulated Annealing**: temperature-driven random walk, best of
//!   several restarts, seedable for reproducibility.
//!
//! # Architecture
//!
//! [`graph::Graph`] stores adjacency and coordinate data;
//! [`search::SearchAgent`] binds a graph to a `(start, goal)` pair,
//! precomputes the great-circle heuristic for every node, and runs any
//! strategy on demand. [`report`] renders the coordinate data as a
//! plain-text distance listing.
//!
//! # Examples
//!
//! ```
//! use u_pathsearch::graph::Graph;
//! use u_pathsearch::search::{SearchAgent, Strategy};
//!
//! let mut map = Graph::undirected();
//! map.connect("Arad", "Zerind", 51.0);
//! map.connect("Zerind", "Oradea", 56.0);
//! map.connect("Arad", "Sibiu", 223.0);
//! map.connect("Sibiu", "Oradea", 220.0);
//!
//! let agent = SearchAgent::new(&map, "Arad", "Oradea")?;
//! let route = agent.search(&Strategy::AStar)?;
//! assert_eq!(route.path, vec!["Arad", "Zerind", "Oradea"]);
//! assert_eq!(route.cost, 107.0);
//! # Ok::<(), u_pathsearch::search::SearchError>(())
//! ```

pub mod graph;
pub mod report;
pub mod search;

#[cfg(test)]
pub(crate) mod testutil;
