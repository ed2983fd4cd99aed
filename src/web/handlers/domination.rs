// Domination handlers — section-completeness check.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::evaluator::checks;
use crate::evaluator::Verdict;
use crate::web::error::ApiError;
use crate::web::group_health;

#[derive(Deserialize, Default)]
pub struct ContentSectionsRequest {
    /// Section name → presence marker. Values are JSON-truthy, not strict
    /// booleans — upstream tools send "yes"/1 as readily as true.
    #[serde(default)]
    pub sections: Map<String, Value>,
}

/// GET /api/domination/health
pub async fn health() -> Json<Value> {
    group_health("domination")
}

/// POST /api/domination/validate/content — passes with 10+ truthy sections.
pub async fn validate_content(
    payload: Result<Json<ContentSectionsRequest>, JsonRejection>,
) -> Result<Json<Verdict>, ApiError> {
    let Json(body) = payload?;
    Ok(Json(checks::section_completeness(&body.sections)))
}
