use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::warn;
use triage_core::{AssessmentRequest, TriageError};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/health-assessment", post(health_assessment))
}

async fn health_assessment(
    State(state): State<AppState>,
    payload: Result<Json<AssessmentRequest>, JsonRejection>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let Json(input) = payload.map_err(|e| {
        let detail = e.body_text();
        warn!("health assessment rejected: {detail}");
        to_error(TriageError::InvalidInput(detail))
    })?;
    let report = state.assessor.assess(&input);
    serde_json::to_value(&report)
        .map(Json)
        .map_err(|e| to_error(TriageError::Internal(format!("serialize assessment: {e}"))))
}

fn to_error(e: TriageError) -> (StatusCode, Json<Value>) {
    let (status, msg) = match &e {
        TriageError::InvalidInput(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        TriageError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "success": false, "error": msg })))
}
