//! Geographic coordinates and great-circle distance.

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Coord {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Great-circle distance between two coordinates, in kilometers.
///
/// Haversine formula: `h = sin^2(dlat/2) + cos(lat1) * cos(lat2) * sin^2(dlon/2)`,
/// distance `= 2 * R * atan2(sqrt(h), sqrt(1 - h))`.
///
/// The result is symmetric in its arguments and zero for equal coordinates.
pub fn haversine(a: Coord, b: Coord) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ARAD: Coord = Coord {
        lat: 46.1866,
        lon: 21.3123,
    };
    const ZERIND: Coord = Coord {
        lat: 46.6225,
        lon: 21.5174,
    };

    #[test]
    fn test_haversine_zero_for_equal_coordinates() {
        assert_eq!(haversine(ARAD, ARAD), 0.0);
    }

    #[test]
    fn test_haversine_known_distance() {
        // Arad to Zerind, cross-checked against an independent implementation.
        let d = haversine(ARAD, ZERIND);
        assert!(
            (d - 50.957).abs() < 1e-3,
            "expected ~50.957 km, got {d}"
        );
    }

    #[test]
    fn test_haversine_symmetric() {
        assert_eq!(haversine(ARAD, ZERIND), haversine(ZERIND, ARAD));
    }

    proptest! {
        #[test]
        fn prop_haversine_symmetric(
            lat1 in -85.0..85.0f64,
            lon1 in -180.0..180.0f64,
            lat2 in -85.0..85.0f64,
            lon2 in -180.0..180.0f64,
        ) {
            let a = Coord::new(lat1, lon1);
            let b = Coord::new(lat2, lon2);
            prop_assert!((haversine(a, b) - haversine(b, a)).abs() < 1e-9);
        }

        #[test]
        fn prop_haversine_non_negative(
            lat1 in -85.0..85.0f64,
            lon1 in -180.0..180.0f64,
            lat2 in -85.0..85.0f64,
            lon2 in -180.0..180.0f64,
        ) {
            prop_assert!(haversine(Coord::new(lat1, lon1), Coord::new(lat2, lon2)) >= 0.0);
        }
    }
}
