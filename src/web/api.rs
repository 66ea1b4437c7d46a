// src/web/api.rs
// REST API handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::outcome::{DecisionRequest, DecisionResponse};
use crate::web::error::{ApiError, INVALID_BODY_MESSAGE};
use crate::web::state::AppState;

// ═══════════════════════════════════════
// HEALTH & SMOKE TEST
// ═══════════════════════════════════════

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "model": state.outcomes.model_name(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Ask the model for something random and return its raw text
pub async fn smoke_test(State(state): State<AppState>) -> Response {
    match state.outcomes.smoke_test().await {
        Ok(text) => text.into_response(),
        Err(e) => {
            error!(error = %e, "Smoke test failed");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", e)).into_response()
        }
    }
}

// ═══════════════════════════════════════
// DECISIONS
// ═══════════════════════════════════════

/// Project the outcome of a decision
pub async fn evaluate_decision(
    State(state): State<AppState>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> Result<Json<DecisionResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(rejection = %rejection.body_text(), "Rejected decision body");
        ApiError::BadRequest(INVALID_BODY_MESSAGE.to_string())
    })?;

    let response = state.outcomes.evaluate_decision(request).await?;
    Ok(Json(response))
}
