//! This module is responsible for loading road data from an OSM extract
//! and building the routable network held for the process lifetime.

mod config;
pub mod osm;

pub use config::RoadNetworkConfig;

use log::info;

use crate::model::RoadNetwork;
use crate::Error;

/// Creates a road network based on the provided configuration
///
/// # Errors
///
/// Returns an error if the extract is missing, unreadable, or contains
/// no drivable roads.
pub fn create_road_network(config: &RoadNetworkConfig) -> Result<RoadNetwork, Error> {
    validate_config(config)?;

    info!(
        "Processing street data (OSM): {}",
        config.osm_path.display()
    );

    let graph = osm::create_road_graph(&config.osm_path)?;
    let network = RoadNetwork::new(graph, config.region.clone());

    if network.node_count() == 0 {
        return Err(Error::InvalidData(format!(
            "No drivable roads found in OSM extract: {}",
            config.osm_path.display()
        )));
    }

    info!(
        "Loaded road network for {}: {} nodes, {} edges",
        network.region(),
        network.node_count(),
        network.edge_count()
    );

    Ok(network)
}

fn validate_config(config: &RoadNetworkConfig) -> Result<(), Error> {
    if !config.osm_path.exists() {
        return Err(Error::InvalidData(format!(
            "OSM file not found: {}",
            config.osm_path.display()
        )));
    }

    Ok(())
}
