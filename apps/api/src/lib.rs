//! sentiscope-api: a single-route sentiment classification endpoint.
//!
//! Accepts raw text on `POST /predict` and answers with a binary label plus
//! the model's confidence. The pretrained star-rating model is loaded once
//! at startup and served for the process lifetime; a failed load degrades
//! the service to a fixed fallback response instead of crashing (the
//! degraded state is visible on `GET /health`).
//!
//! The crate is a library as well as a binary so the interactive console
//! can host the endpoint as a supervised in-process task.

pub mod classifier;
pub mod config;
pub mod errors;
pub mod routes;
pub mod state;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use classifier::{Classification, ModelState, Sentiment, StarRater, StarRating};
pub use config::Config;
pub use state::AppState;

/// Builds the full application: routes plus request tracing and the
/// permissive CORS the original deployment allowed on loopback.
pub fn app(state: AppState) -> axum::Router {
    routes::build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serves the application on an already-bound listener until the task is
/// dropped or the server errors out.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> anyhow::Result<()> {
    axum::serve(listener, app(state)).await?;
    Ok(())
}
