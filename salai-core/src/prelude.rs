// Re-export key components
pub use crate::loading::{RoadNetworkConfig, create_road_network};
pub use crate::model::{IndexedPoint, RoadEdge, RoadNetwork, RoadNode};
pub use crate::render::render_map;
pub use crate::routing::{Route, find_route};
pub use crate::traffic::{TrafficEstimate, TrafficLevel, predict};

// Core scalar types
pub use crate::BASE_SPEED_KMH;
pub use crate::Meters;
