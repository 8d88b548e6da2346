use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Readiness signal for clients probing at startup. `model` reports whether
/// real inference is available or the fixed fallback is being served.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "sentiscope-api",
        "version": env!("CARGO_PKG_VERSION"),
        "model": if state.model.is_ready() { "ready" } else { "degraded" },
    }))
}
