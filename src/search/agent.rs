//! Search agent: heuristic table and strategy dispatch.

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::graph::Graph;

use super::types::{Route, SearchError, Strategy};

/// A problem-solving agent bound to one `(start, goal)` pair.
///
/// Construction eagerly computes the heuristic table (estimated distance
/// from every node to the goal); the table and the borrowed graph stay
/// immutable across searches, so the agent can run any number of
/// strategies without being rebuilt.
///
/// # Examples
///
/// ```
/// use u_pathsearch::graph::Graph;
/// use u_pathsearch::search::SearchAgent;
///
/// let mut map = Graph::undirected();
/// map.connect("Arad", "Zerind", 51.0);
/// map.connect("Zerind", "Oradea", 56.0);
///
/// let agent = SearchAgent::new(&map, "Arad", "Oradea").unwrap();
/// let route = agent.a_star().unwrap();
/// assert_eq!(route.path, vec!["Arad", "Zerind", "Oradea"]);
/// assert_eq!(route.cost, 107.0);
/// ```
pub struct SearchAgent<'g, N: Ord> {
    graph: &'g Graph<N>,
    start: N,
    goal: N,
    heuristics: BTreeMap<N, f64>,
}

impl<'g, N: Clone + Ord + Display> SearchAgent<'g, N> {
    /// Binds an agent to a graph and a `(start, goal)` pair.
    ///
    /// Fails with [`SearchError::UnknownNode`] when either endpoint is
    /// not a node of the graph. A start equal to the goal is accepted;
    /// every strategy then returns the single-node route of cost zero.
    pub fn new(graph: &'g Graph<N>, start: N, goal: N) -> Result<Self, SearchError> {
        if !graph.contains(&start) {
            return Err(SearchError::unknown_node(&start));
        }
        if !graph.contains(&goal) {
            return Err(SearchError::unknown_node(&goal));
        }

        let heuristics = graph
            .nodes()
            .into_iter()
            .map(|node| {
                let estimate = graph.heuristic(&goal, &node);
                (node, estimate)
            })
            .collect();

        Ok(Self {
            graph,
            start,
            goal,
            heuristics,
        })
    }

    pub fn graph(&self) -> &Graph<N> {
        self.graph
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn goal(&self) -> &N {
        &self.goal
    }

    /// Precomputed estimate of the distance from `node` to the goal.
    /// Zero for nodes without coordinate data.
    pub fn heuristic(&self, node: &N) -> f64 {
        self.heuristics.get(node).copied().unwrap_or(0.0)
    }

    /// Runs the given strategy.
    pub fn search(&self, strategy: &Strategy) -> Result<Route<N>, SearchError> {
        match strategy {
            Strategy::GreedyBestFirst => self.greedy_best_first(),
            Strategy::AStar => self.a_star(),
            Strategy::HillClimbing => self.hill_climbing(),
            Strategy::SimulatedAnnealing(config) => self.simulated_annealing(config),
        }
    }
}
