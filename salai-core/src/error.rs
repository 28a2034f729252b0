use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No nearby road nodes found for snapping")]
    NoPointsFound,
    #[error("No route found between the given points")]
    NoRouteFound,
    #[error("Invalid node index")]
    InvalidNodeIndex,
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("OSM error: {0}")]
    OsmError(#[from] osmpbf::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
