//! Adjacency-map weighted graph with optional node coordinates.

use std::collections::{BTreeMap, BTreeSet};

use super::geo::{haversine, Coord};

/// A weighted graph over node identifiers of type `N`.
///
/// Edges live in an adjacency map from source to (target, weight). An
/// undirected graph mirrors every inserted edge at insertion time; the
/// mirror invariant is established by [`Graph::connect`] and
/// [`Graph::from_edges`], never re-checked afterwards.
///
/// Ordered maps keep node and neighbor iteration deterministic, which the
/// search strategies rely on for reproducible tie-breaking.
///
/// # Examples
///
/// ```
/// use u_pathsearch::graph::Graph;
///
/// let mut map = Graph::undirected();
/// map.connect("Arad", "Zerind", 51.0);
/// assert_eq!(map.cost(&"Zerind", &"Arad"), Some(51.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph<N: Ord> {
    directed: bool,
    edges: BTreeMap<N, BTreeMap<N, f64>>,
    locations: BTreeMap<N, Coord>,
}

impl<N: Clone + Ord> Graph<N> {
    /// Creates an empty graph with the given directedness.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            edges: BTreeMap::new(),
            locations: BTreeMap::new(),
        }
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Builds a graph from an edge list, mirroring edges when undirected.
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut graph = Self::new(directed);
        for (a, b, weight) in edges {
            graph.connect(a, b, weight);
        }
        graph
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Inserts (or overwrites) the edge `a -> b`. Undirected graphs also
    /// insert `b -> a` with the same weight.
    pub fn connect(&mut self, a: N, b: N, weight: f64) {
        if !self.directed {
            self.connect_one(b.clone(), a.clone(), weight);
        }
        self.connect_one(a, b, weight);
    }

    fn connect_one(&mut self, a: N, b: N, weight: f64) {
        self.edges.entry(a).or_default().insert(b, weight);
    }

    /// Identifiers reachable by one outgoing edge from `node`. Empty for a
    /// node with no recorded outgoing edges.
    pub fn neighbors(&self, node: &N) -> impl Iterator<Item = &N> {
        self.edges.get(node).into_iter().flat_map(|links| links.keys())
    }

    /// Weight of the edge `from -> to`, or `None` when absent. Callers are
    /// expected to query only edges discovered via [`Graph::neighbors`].
    pub fn cost(&self, from: &N, to: &N) -> Option<f64> {
        self.edges.get(from)?.get(to).copied()
    }

    /// All identifiers appearing as an edge source or target, in sorted
    /// order.
    pub fn nodes(&self) -> Vec<N> {
        let mut all: BTreeSet<&N> = self.edges.keys().collect();
        for links in self.edges.values() {
            all.extend(links.keys());
        }
        all.into_iter().cloned().collect()
    }

    /// Whether `node` appears anywhere in the edge maps.
    pub fn contains(&self, node: &N) -> bool {
        self.edges.contains_key(node) || self.edges.values().any(|links| links.contains_key(node))
    }

    /// Records the geographic position of a node.
    pub fn set_location(&mut self, node: N, coord: Coord) {
        self.locations.insert(node, coord);
    }

    /// Geographic position of a node, if recorded.
    pub fn location(&self, node: &N) -> Option<Coord> {
        self.locations.get(node).copied()
    }

    /// Estimated remaining distance from `node` to `goal`: the great-circle
    /// distance between their coordinates in whole kilometers, or `0.0`
    /// when either coordinate is missing.
    ///
    /// The fractional kilometer is truncated, so the estimate never
    /// overestimates the true great-circle distance.
    pub fn heuristic(&self, goal: &N, node: &N) -> f64 {
        match (self.location(goal), self.location(node)) {
            (Some(to), Some(from)) => haversine(from, to).trunc(),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_undirected_connect_mirrors_edge() {
        let mut graph = Graph::undirected();
        graph.connect("a", "b", 7.0);

        assert!(graph.neighbors(&"a").any(|n| *n == "b"));
        assert!(graph.neighbors(&"b").any(|n| *n == "a"));
        assert_eq!(graph.cost(&"a", &"b"), Some(7.0));
        assert_eq!(graph.cost(&"b", &"a"), Some(7.0));
    }

    #[test]
    fn test_directed_connect_is_one_way() {
        let mut graph = Graph::directed();
        graph.connect("a", "b", 3.0);

        assert_eq!(graph.cost(&"a", &"b"), Some(3.0));
        assert_eq!(graph.cost(&"b", &"a"), None);
        assert_eq!(graph.neighbors(&"b").count(), 0);
    }

    #[test]
    fn test_connect_overwrites_weight() {
        let mut graph = Graph::undirected();
        graph.connect("a", "b", 1.0);
        graph.connect("a", "b", 2.0);

        assert_eq!(graph.cost(&"a", &"b"), Some(2.0));
        assert_eq!(graph.cost(&"b", &"a"), Some(2.0));
    }

    #[test]
    fn test_nodes_includes_edge_targets() {
        let mut graph = Graph::directed();
        graph.connect("a", "b", 1.0);
        graph.connect("a", "c", 1.0);

        assert_eq!(graph.nodes(), vec!["a", "b", "c"]);
        assert!(graph.contains(&"c"));
        assert!(!graph.contains(&"d"));
    }

    #[test]
    fn test_neighbors_of_unknown_node_is_empty() {
        let graph: Graph<&str> = Graph::undirected();
        assert_eq!(graph.neighbors(&"nowhere").count(), 0);
    }

    #[test]
    fn test_heuristic_without_coordinates_is_zero() {
        let mut graph = Graph::undirected();
        graph.connect("a", "b", 1.0);
        assert_eq!(graph.heuristic(&"b", &"a"), 0.0);
    }

    #[test]
    fn test_heuristic_truncates_to_whole_kilometers() {
        let mut graph = Graph::undirected();
        graph.connect("Arad", "Zerind", 51.0);
        graph.set_location("Arad", Coord::new(46.1866, 21.3123));
        graph.set_location("Zerind", Coord::new(46.6225, 21.5174));

        // Exact great-circle distance is ~50.957 km.
        assert_eq!(graph.heuristic(&"Zerind", &"Arad"), 50.0);
        assert_eq!(graph.heuristic(&"Arad", &"Zerind"), 50.0);
        assert_eq!(graph.heuristic(&"Arad", &"Arad"), 0.0);
    }

    #[test]
    fn test_from_edges_symmetrizes_undirected() {
        let graph = Graph::from_edges(false, [("a", "b", 4.0), ("b", "c", 5.0)]);
        assert_eq!(graph.cost(&"c", &"b"), Some(5.0));
        assert_eq!(graph.cost(&"b", &"a"), Some(4.0));
    }

    proptest! {
        #[test]
        fn prop_undirected_edges_are_mirrored(
            edges in proptest::collection::vec((0u8..12, 0u8..12, 1.0..500.0f64), 1..40)
        ) {
            let graph = Graph::from_edges(false, edges.clone());
            for (a, b, _) in &edges {
                prop_assert!(graph.neighbors(a).any(|n| n == b));
                prop_assert!(graph.neighbors(b).any(|n| n == a));
                // Later inserts may overwrite the weight, but the mirror
                // must always agree with the forward edge.
                prop_assert_eq!(graph.cost(a, b), graph.cost(b, a));
            }
        }
    }
}
