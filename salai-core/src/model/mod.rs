//! Data model for the drivable road network
//!
//! Contains the graph node/edge types and the network structure shared
//! read-only by every routing request.

pub mod components;
pub mod network;

pub use components::{RoadEdge, RoadNode};
pub use network::{IndexedPoint, RoadNetwork};
