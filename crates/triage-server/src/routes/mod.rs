pub mod assessment;
pub mod health;
pub mod resources;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use triage_engine::Assessor;

pub struct InnerAppState {
    pub assessor: Assessor,
}

pub type AppState = Arc<InnerAppState>;

pub fn app_state() -> AppState {
    Arc::new(InnerAppState {
        assessor: Assessor::new(),
    })
}

/// The API is served open to browser clients, so CORS is wide open.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(assessment::routes())
        .merge(resources::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
