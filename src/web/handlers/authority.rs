// Authority handlers — external-validation (awards) check.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::evaluator::checks;
use crate::evaluator::Verdict;
use crate::web::error::ApiError;
use crate::web::group_health;

#[derive(Deserialize, Default)]
pub struct AwardsRequest {
    #[serde(default)]
    pub external_links: Vec<String>,
}

/// GET /api/authority/health
pub async fn health() -> Json<Value> {
    group_health("authority")
}

/// POST /api/authority/validate/awards — passes with 2+ external links.
pub async fn validate_awards(
    payload: Result<Json<AwardsRequest>, JsonRejection>,
) -> Result<Json<Verdict>, ApiError> {
    let Json(body) = payload?;
    Ok(Json(checks::external_validation(&body.external_links)))
}
