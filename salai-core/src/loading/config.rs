use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Source description for a road network
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadNetworkConfig {
    /// Human-readable name of the covered region
    pub region: String,
    /// OSM PBF extract covering the region
    pub osm_path: PathBuf,
}

impl Default for RoadNetworkConfig {
    fn default() -> Self {
        Self {
            region: "Chennai, Tamil Nadu, India".to_string(),
            osm_path: PathBuf::from("data/chennai.osm.pbf"),
        }
    }
}
