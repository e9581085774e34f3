//! Chat endpoint handler
//!
//! POST /chat always answers HTTP 200: upstream failures collapse to a
//! fixed apology, validation failures apply the configured fallback policy.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use super::state::AppState;
use crate::domain::guardrails::{FallbackPolicy, REFUSAL};

pub const APOLOGY: &str =
    "I apologize, but I'm having trouble processing your request right now.";

#[derive(Debug, Deserialize, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
}

/// POST /chat
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<ChatResponse> {
    // A malformed body is treated like any other failure: 200 + apology
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            error!(error = %rejection, "Rejected /chat body");
            return Json(ChatResponse {
                response: APOLOGY.to_string(),
                session_id: Uuid::new_v4().to_string(),
            });
        }
    };

    let session_id = request
        .session_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let request_id = Uuid::new_v4().to_string();

    info!(request_id = %request_id, session_id = %session_id, "User input: {}", request.message);

    let response = answer_validated(&state, &session_id, &request.message).await;

    Json(ChatResponse {
        response,
        session_id,
    })
}

async fn answer_validated(state: &AppState, session_id: &str, message: &str) -> String {
    let raw = match state.pipeline.answer(session_id, message).await {
        Ok(raw) => raw,
        Err(e) => {
            error!(session_id, error = %e, "Pipeline failed");
            return APOLOGY.to_string();
        }
    };
    info!(session_id, "Raw response: {}", raw);

    match state.guard.validate(&raw).await {
        Ok(validated) => {
            info!(session_id, "Validated response: {}", validated);
            validated
        }
        Err(e) => {
            warn!(session_id, error = %e, "Guardrails validation failed");
            match state.fallback_policy {
                FallbackPolicy::FailOpen => raw,
                FallbackPolicy::FailClosed => REFUSAL.to_string(),
            }
        }
    }
}
