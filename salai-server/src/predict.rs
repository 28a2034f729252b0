use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chrono::{DateTime, Local};
use geo::Point;
use salai_core::render::render_map;
use salai_core::routing::find_route;
use salai_core::traffic::{TrafficEstimate, predict};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub start_lat: f64,
    pub start_lon: f64,
    pub end_lat: f64,
    pub end_lon: f64,
    /// RFC 3339 departure time; defaults to the current local time
    #[serde(default)]
    pub departure_time: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    /// Route as [lat, lon] pairs in travel order
    pub route: Vec<[f64; 2]>,
    pub prediction: TrafficEstimate,
    pub map_url: String,
}

pub async fn predict_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let start = Point::new(request.start_lon, request.start_lat);
    let end = Point::new(request.end_lon, request.end_lat);

    let route = find_route(&state.network, start, end)?;

    // The severity rule keys on the wall-clock hour of the given
    // departure time, in its own offset
    let prediction = match &request.departure_time {
        Some(raw) => {
            let at = DateTime::parse_from_rfc3339(raw)
                .map_err(|err| ApiError::BadRequest(format!("invalid departure_time: {err}")))?;
            predict(&route, &at)
        }
        None => predict(&route, &Local::now()),
    };

    render_map(&route, &prediction, &state.config.render.artifact_path())?;

    info!(
        distance_km = prediction.distance_km,
        minutes = prediction.estimated_minutes,
        "computed route with {} points",
        route.len()
    );

    let coords = route.points().iter().map(|p| [p.y(), p.x()]).collect();
    Ok(Json(PredictResponse {
        route: coords,
        prediction,
        map_url: state.config.render.map_url(),
    }))
}
