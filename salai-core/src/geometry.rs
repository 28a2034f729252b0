//! Great-circle geometry over route coordinates

use geo::Point;
use itertools::Itertools;

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers.
///
/// Points are (lon, lat) in degrees, spherical Earth assumed.
pub fn haversine_km(a: Point<f64>, b: Point<f64>) -> f64 {
    let (lat1, lat2) = (a.y().to_radians(), b.y().to_radians());
    let dlat = (b.y() - a.y()).to_radians();
    let dlon = (b.x() - a.x()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Total length of a coordinate sequence in kilometers.
///
/// Sums pairwise haversine distances between consecutive points,
/// ignoring road curvature between them. Sequences with fewer than
/// two points have zero length.
pub fn path_distance_km(points: &[Point<f64>]) -> f64 {
    points
        .iter()
        .tuple_windows()
        .map(|(a, b)| haversine_km(*a, *b))
        .sum()
}

/// Arithmetic mean of a set of coordinates.
///
/// Used to center the rendered map; `None` for an empty set.
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[Point<f64>]) -> Option<Point<f64>> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(x, y), p| (x + p.x(), y + p.y()));
    Some(Point::new(sum_x / n, sum_y / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Chennai Central and Chennai Airport
    const CENTRAL: (f64, f64) = (80.2707, 13.0827);
    const AIRPORT: (f64, f64) = (80.2207, 13.0067);

    #[test]
    fn haversine_is_symmetric() {
        let a = Point::new(CENTRAL.0, CENTRAL.1);
        let b = Point::new(AIRPORT.0, AIRPORT.1);
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }

    #[test]
    fn haversine_zero_for_same_point() {
        let p = Point::new(CENTRAL.0, CENTRAL.1);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn haversine_known_pair() {
        let a = Point::new(CENTRAL.0, CENTRAL.1);
        let b = Point::new(AIRPORT.0, AIRPORT.1);
        let d = haversine_km(a, b);
        assert!((d - 10.0).abs() < 0.1, "expected ~10 km, got {d}");
    }

    #[test]
    fn path_distance_empty_and_single() {
        assert_eq!(path_distance_km(&[]), 0.0);
        assert_eq!(path_distance_km(&[Point::new(80.0, 13.0)]), 0.0);
    }

    #[test]
    fn path_distance_sums_segments() {
        let a = Point::new(CENTRAL.0, CENTRAL.1);
        let b = Point::new(AIRPORT.0, AIRPORT.1);
        let via = Point::new(80.25, 13.05);
        let total = path_distance_km(&[a, via, b]);
        let direct = haversine_km(a, b);
        assert!(total >= direct);
        let expected = haversine_km(a, via) + haversine_km(via, b);
        assert!((total - expected).abs() < 1e-12);
    }

    #[test]
    fn centroid_is_mean() {
        let points = [Point::new(0.0, 0.0), Point::new(2.0, 4.0)];
        let c = centroid(&points).unwrap();
        assert_eq!(c, Point::new(1.0, 2.0));
        assert!(centroid(&[]).is_none());
    }
}
