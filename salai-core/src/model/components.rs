//! Road network components - nodes and edges

use geo::Point;

use crate::Meters;

/// Road graph node
#[derive(Debug, Clone)]
pub struct RoadNode {
    /// OSM ID of the node
    pub osm_id: i64,
    /// Node coordinates
    pub geometry: Point<f64>,
}

/// Road graph edge (street segment)
#[derive(Debug, Clone)]
pub struct RoadEdge {
    /// Physical segment length in meters
    pub length: Meters,
}

impl RoadEdge {
    pub fn length(&self) -> Meters {
        self.length
    }
}
