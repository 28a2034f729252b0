//! Server configuration loaded from a TOML file

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use salai_core::loading::RoadNetworkConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: ServerSection,
    pub network: RoadNetworkConfig,
    pub render: RenderSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Address the HTTP server binds to
    pub listen: SocketAddr,
    /// Pre-built front-end served at the root path
    pub frontend_dir: PathBuf,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([127, 0, 0, 1], 8000)),
            frontend_dir: PathBuf::from("web"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSection {
    /// Directory served under /static, holding the map artifact
    pub static_dir: PathBuf,
    /// File name of the map artifact, overwritten on each prediction
    pub map_file: String,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            map_file: "route_map.html".to_string(),
        }
    }
}

impl RenderSection {
    pub fn artifact_path(&self) -> PathBuf {
        self.static_dir.join(&self.map_file)
    }

    pub fn map_url(&self) -> String {
        format!("/static/{}", self.map_file)
    }
}

impl ServerConfig {
    /// Reads the config file; a missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
