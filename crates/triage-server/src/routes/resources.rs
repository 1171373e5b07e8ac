use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use triage_catalog::tips;

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/health-tips", get(health_tips))
        .route("/api/emergency-contacts", get(emergency_contacts))
}

async fn health_tips() -> Json<Value> {
    Json(json!({ "success": true, "tips": tips::HEALTH_TIPS }))
}

async fn emergency_contacts() -> Json<Value> {
    Json(json!({ "success": true, "contacts": tips::EMERGENCY_CONTACTS }))
}
