//! Road network graph with a spatial index for coordinate snapping

use geo::Point;
use petgraph::graph::{NodeIndex, UnGraph};
use rstar::RTree;
use rstar::primitives::GeomWithData;

use super::components::{RoadEdge, RoadNode};
use crate::Error;

/// Graph node position indexed for nearest-neighbor queries
pub type IndexedPoint = GeomWithData<[f64; 2], NodeIndex>;

/// Drivable road network for a single region.
///
/// Built once at startup and never mutated afterwards, so it can be
/// shared freely between concurrent readers.
pub struct RoadNetwork {
    /// Underlying street graph. Edge lengths are symmetric, so the
    /// graph is undirected and reverse travel reuses the same weight.
    pub graph: UnGraph<RoadNode, RoadEdge>,
    rtree: RTree<IndexedPoint>,
    region: String,
}

impl RoadNetwork {
    /// Wraps a finished street graph and indexes its node positions.
    pub fn new(graph: UnGraph<RoadNode, RoadEdge>, region: impl Into<String>) -> Self {
        let points = graph
            .node_indices()
            .map(|idx| {
                let geometry = graph[idx].geometry;
                IndexedPoint::new([geometry.x(), geometry.y()], idx)
            })
            .collect();

        Self {
            graph,
            rtree: RTree::bulk_load(points),
            region: region.into(),
        }
    }

    /// Resolves a coordinate to the nearest graph node by straight-line
    /// proximity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPointsFound`] when the network is empty.
    pub fn snap(&self, point: Point<f64>) -> Result<NodeIndex, Error> {
        self.rtree
            .nearest_neighbor(&[point.x(), point.y()])
            .map(|indexed| indexed.data)
            .ok_or(Error::NoPointsFound)
    }

    /// Coordinates of a graph node.
    pub fn coordinates(&self, node: NodeIndex) -> Result<Point<f64>, Error> {
        self.graph
            .node_weight(node)
            .map(|weight| weight.geometry)
            .ok_or(Error::InvalidNodeIndex)
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl std::fmt::Debug for RoadNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoadNetwork")
            .field("region", &self.region)
            .field("nodes", &self.graph.node_count())
            .field("edges", &self.graph.edge_count())
            .finish()
    }
}
