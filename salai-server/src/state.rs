use salai_core::model::RoadNetwork;

use crate::config::ServerConfig;

/// Shared, read-only state injected into every handler.
pub struct AppState {
    pub network: RoadNetwork,
    pub config: ServerConfig,
}
