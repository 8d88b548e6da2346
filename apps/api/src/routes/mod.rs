pub mod health;
pub mod predict;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/predict", post(predict::predict_handler))
        .with_state(state)
}
