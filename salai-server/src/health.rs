use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// Liveness probe reporting the loaded region and graph size.
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "region": state.network.region(),
        "nodes": state.network.node_count(),
        "edges": state.network.edge_count(),
    }))
}
