//! Shared test fixture: the Romania road map.

use crate::graph::{Coord, Graph};

/// The 20-city Romania map with road distances recalculated from city
/// coordinates via the great-circle formula.
pub(crate) fn romania() -> Graph<&'static str> {
    let mut map = Graph::from_edges(
        false,
        [
            ("Arad", "Zerind", 51.0),
            ("Arad", "Sibiu", 223.0),
            ("Arad", "Timisoara", 49.0),
            ("Bucharest", "Urziceni", 54.0),
            ("Bucharest", "Pitesti", 109.0),
            ("Bucharest", "Giurgiu", 59.0),
            ("Bucharest", "Fagaras", 181.0),
            ("Craiova", "Drobeta", 96.0),
            ("Craiova", "Rimnicu", 97.0),
            ("Craiova", "Pitesti", 103.0),
            ("Drobeta", "Mehadia", 38.0),
            ("Eforie", "Hirsova", 89.0),
            ("Fagaras", "Sibiu", 64.0),
            ("Hirsova", "Urziceni", 103.0),
            ("Iasi", "Vaslui", 58.0),
            ("Iasi", "Neamt", 95.0),
            ("Lugoj", "Timisoara", 54.0),
            ("Lugoj", "Mehadia", 95.0),
            ("Oradea", "Zerind", 56.0),
            ("Oradea", "Sibiu", 220.0),
            ("Pitesti", "Rimnicu", 48.0),
            ("Rimnicu", "Sibiu", 80.0),
            ("Urziceni", "Vaslui", 230.0),
        ],
    );

    for (city, lat, lon) in [
        ("Arad", 46.1866, 21.3123),
        ("Bucharest", 44.4268, 26.1025),
        ("Craiova", 44.3302, 23.7949),
        ("Drobeta", 44.6369, 22.6597),
        ("Eforie", 44.0613, 28.6310),
        ("Fagaras", 45.8416, 24.9731),
        ("Giurgiu", 43.9037, 25.9699),
        ("Hirsova", 44.6893, 27.9457),
        ("Iasi", 47.1585, 27.6014),
        ("Lugoj", 45.6910, 21.9035),
        ("Mehadia", 44.9052, 22.3673),
        ("Neamt", 46.9759, 26.3819),
        ("Oradea", 47.0465, 21.9189),
        ("Pitesti", 44.8565, 24.8692),
        ("Rimnicu", 45.0997, 24.3693),
        ("Sibiu", 45.8035, 24.1450),
        ("Timisoara", 45.7489, 21.2087),
        ("Urziceni", 44.7181, 26.6453),
        ("Vaslui", 46.6407, 27.7276),
        ("Zerind", 46.6225, 21.5174),
    ] {
        map.set_location(city, Coord::new(lat, lon));
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_has_twenty_cities_with_coordinates() {
        let map = romania();
        let nodes = map.nodes();
        assert_eq!(nodes.len(), 20);
        for city in &nodes {
            assert!(map.location(city).is_some(), "missing coordinates: {city}");
        }
    }

    #[test]
    fn test_fixture_is_undirected() {
        let map = romania();
        assert!(!map.is_directed());
        assert_eq!(map.cost(&"Sibiu", &"Arad"), Some(223.0));
        assert_eq!(map.cost(&"Arad", &"Sibiu"), Some(223.0));
    }
}
