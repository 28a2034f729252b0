//! Shortest-path routing over the road network

mod dijkstra;

use geo::Point;

use crate::model::RoadNetwork;
use crate::Error;

/// An ordered sequence of coordinates from origin to destination.
#[derive(Debug, Clone)]
pub struct Route {
    points: Vec<Point<f64>>,
}

impl Route {
    pub fn new(points: Vec<Point<f64>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point<f64>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point<f64>> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Finds the shortest drivable route between two coordinates.
///
/// Both endpoints are snapped to their nearest graph node, then the
/// minimum-total-length path is traced between them. The result lists
/// node coordinates in travel order, origin side first.
///
/// # Errors
///
/// [`Error::NoPointsFound`] when an endpoint cannot be snapped (empty
/// network) and [`Error::NoRouteFound`] when the snapped nodes lie in
/// disconnected components.
pub fn find_route(network: &RoadNetwork, start: Point<f64>, end: Point<f64>) -> Result<Route, Error> {
    let start_node = network.snap(start)?;
    let end_node = network.snap(end)?;

    let node_path = dijkstra::shortest_path(network, start_node, end_node)
        .ok_or(Error::NoRouteFound)?;

    let mut points = Vec::with_capacity(node_path.len());
    for node in node_path {
        points.push(network.coordinates(node)?);
    }

    Ok(Route::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RoadEdge, RoadNode};
    use petgraph::graph::UnGraph;

    fn node(osm_id: i64, lon: f64, lat: f64) -> RoadNode {
        RoadNode {
            osm_id,
            geometry: Point::new(lon, lat),
        }
    }

    /// Two routes from a to d: a-b-d (300 m) and a-c-d (150 m), plus an
    /// isolated pair e-f far away.
    fn sample_network() -> RoadNetwork {
        let mut graph = UnGraph::new_undirected();
        let a = graph.add_node(node(1, 80.2700, 13.0800));
        let b = graph.add_node(node(2, 80.2710, 13.0800));
        let c = graph.add_node(node(3, 80.2700, 13.0810));
        let d = graph.add_node(node(4, 80.2710, 13.0810));
        let e = graph.add_node(node(5, 80.4000, 13.3000));
        let f = graph.add_node(node(6, 80.4010, 13.3000));

        graph.add_edge(a, b, RoadEdge { length: 200 });
        graph.add_edge(b, d, RoadEdge { length: 100 });
        graph.add_edge(a, c, RoadEdge { length: 50 });
        graph.add_edge(c, d, RoadEdge { length: 100 });
        graph.add_edge(e, f, RoadEdge { length: 100 });

        RoadNetwork::new(graph, "test")
    }

    #[test]
    fn route_starts_and_ends_at_snapped_nodes() {
        let network = sample_network();
        let start = Point::new(80.2699, 13.0799);
        let end = Point::new(80.2711, 13.0811);

        let route = find_route(&network, start, end).unwrap();
        assert!(!route.is_empty());
        assert_eq!(route.points()[0], Point::new(80.2700, 13.0800));
        assert_eq!(
            *route.points().last().unwrap(),
            Point::new(80.2710, 13.0810)
        );
    }

    #[test]
    fn shorter_of_two_paths_wins() {
        let network = sample_network();
        let route = find_route(
            &network,
            Point::new(80.2700, 13.0800),
            Point::new(80.2710, 13.0810),
        )
        .unwrap();

        // a -> c -> d, not a -> b -> d
        let lats: Vec<f64> = route.points().iter().map(|p| p.y()).collect();
        assert_eq!(route.len(), 3);
        assert_eq!(lats, vec![13.0800, 13.0810, 13.0810]);
        assert_eq!(route.points()[1], Point::new(80.2700, 13.0810));
    }

    #[test]
    fn same_endpoint_routes_to_single_node() {
        let network = sample_network();
        let p = Point::new(80.2700, 13.0800);
        let route = find_route(&network, p, p).unwrap();
        assert_eq!(route.len(), 1);
        assert_eq!(route.points()[0], p);
    }

    #[test]
    fn disconnected_components_have_no_route() {
        let network = sample_network();
        let result = find_route(
            &network,
            Point::new(80.2700, 13.0800),
            Point::new(80.4000, 13.3000),
        );
        assert!(matches!(result, Err(Error::NoRouteFound)));
    }

    #[test]
    fn empty_network_cannot_snap() {
        let network = RoadNetwork::new(UnGraph::new_undirected(), "empty");
        let result = find_route(&network, Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        assert!(matches!(result, Err(Error::NoPointsFound)));
    }
}
