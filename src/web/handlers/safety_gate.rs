// Safety-gate handlers — spam, helpfulness, and safety evaluators.
//
// All three take `{ "content": "..." }` and return a label + score.
// Scores are rounded to 2 decimals here, at the response boundary; the
// evaluators compose at full precision.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::evaluator::{helpful, round2};
use crate::web::error::ApiError;
use crate::web::{group_health, AppState};

#[derive(Deserialize, Default)]
pub struct ContentRequest {
    #[serde(default)]
    pub content: String,
}

/// GET /api/safety-gate/health
pub async fn health() -> Json<Value> {
    group_health("safety_gate")
}

/// POST /api/safety-gate/evaluate/spam — keyword base + heuristic boost.
pub async fn evaluate_spam(
    State(state): State<AppState>,
    payload: Result<Json<ContentRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let result = state.spam.evaluate(&body.content)?;

    Ok(Json(json!({
        "label": result.label.as_str(),
        "score": round2(result.combined_score),
        "signals": {
            "base_score": round2(result.base_score),
            "boost": round2(result.boost),
            "phrase_hits": result.signals.phrase_hits,
            "caps_run": result.signals.caps_run,
            "punctuation_run": result.signals.punctuation_run,
            "link": result.signals.link,
            "phone": result.signals.phone,
            "money": result.signals.money,
        },
    })))
}

/// POST /api/safety-gate/evaluate/helpful — coarse word-count heuristic.
pub async fn evaluate_helpful(
    payload: Result<Json<ContentRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let result = helpful::evaluate(&body.content)?;

    Ok(Json(json!({
        "label": result.label.as_str(),
        "score": round2(result.score),
        "detail": { "word_count": result.word_count },
    })))
}

/// POST /api/safety-gate/evaluate/safety — placeholder until a real
/// toxicity backend exists. Still validates that content is present.
pub async fn evaluate_safety(
    payload: Result<Json<ContentRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    if body.content.trim().is_empty() {
        return Err(ApiError::MissingContent);
    }

    Ok(Json(json!({ "label": "safe", "score": 0.99 })))
}
