// GBP helper handlers — local-relevance check and post preview.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::evaluator::checks;
use crate::evaluator::Verdict;
use crate::web::error::ApiError;
use crate::web::group_health;

#[derive(Deserialize, Default)]
pub struct LocalRelevanceRequest {
    #[serde(default)]
    pub content: String,
    /// Service-area cities to look for in the post body.
    #[serde(default)]
    pub cities: Vec<String>,
}

#[derive(Deserialize, Default)]
pub struct PreviewRequest {
    pub title: Option<String>,
    #[serde(default)]
    pub body: String,
    pub utm: Option<Value>,
}

/// GET /api/gbp-helper/health
pub async fn health() -> Json<Value> {
    group_health("gbp_helper")
}

/// POST /api/gbp-helper/validate/local — city mention + call to action.
pub async fn validate_local(
    payload: Result<Json<LocalRelevanceRequest>, JsonRejection>,
) -> Result<Json<Verdict>, ApiError> {
    let Json(body) = payload?;
    let verdict = checks::local_relevance(&body.content, &body.cities)?;
    Ok(Json(verdict))
}

/// POST /api/gbp-helper/posts/preview — build a GBP post payload with
/// defaults filled in and the body capped.
pub async fn preview_post(
    payload: Result<Json<PreviewRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = payload?;
    let preview = checks::build_post_preview(body.title, &body.body, body.utm);
    Ok(Json(serde_json::json!({ "ok": true, "post": preview })))
}
