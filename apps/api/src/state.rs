use std::sync::Arc;

use crate::classifier::ModelState;

/// Shared application state injected into all route handlers via Axum
/// extractors. The model state is fixed at startup: either a loaded rater or
/// the degraded fallback mode. Requests share it read-only, so there is no
/// cross-request mutable state.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<ModelState>,
}

impl AppState {
    pub fn new(model: ModelState) -> Self {
        Self {
            model: Arc::new(model),
        }
    }
}
