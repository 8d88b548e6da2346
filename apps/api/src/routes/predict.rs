use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::classifier::Classification;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

/// POST /predict
/// Classifies one text. Each request is independent and synchronous: no
/// batching, no queueing, no cross-request state. Inference runs on a
/// blocking thread; while the model is unavailable the fixed fallback
/// result is returned instead of an error.
pub async fn predict_handler(
    State(state): State<AppState>,
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<Classification>, AppError> {
    let model = Arc::clone(&state.model);
    let classification = tokio::task::spawn_blocking(move || model.classify(&req.text))
        .await
        .map_err(|e| AppError::Internal(e.into()))?
        .map_err(|e| AppError::Model(format!("{e:#}")))?;

    Ok(Json(classification))
}
