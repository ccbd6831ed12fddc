//! AI answer-check endpoint

use axum::{extract::State, Json};

use vocab_core::types::GradingResult;

use crate::models::AiCheckRequest;
use crate::AppState;

/// POST /api/ai-check
///
/// Always `200` with a usable `{correct, explanation}` body; grading
/// failures surface as the fallback result, never as an error status.
pub async fn check(
    State(state): State<AppState>,
    Json(payload): Json<AiCheckRequest>,
) -> Json<GradingResult> {
    let result = state
        .grader
        .grade_answer(&payload.front, &payload.back, &payload.answer)
        .await;

    Json(result)
}
