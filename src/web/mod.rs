// Web server — Axum-based JSON validation API.
//
// Four endpoint groups mirror the validator capabilities: safety-gate
// (spam/helpful/safety), authority (external validation), domination
// (section completeness), and gbp-helper (local relevance + previews).
//
// All /api/* POST routes require a bearer token; health endpoints are
// public. Request handling is fully stateless — the evaluators are pure
// and shared immutably, so there is nothing to lock.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::evaluator::spam::SpamEvaluator;

pub mod auth;
pub mod error;
pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub spam: Arc<SpamEvaluator>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config, port: u16, bind: &str) -> Result<()> {
    if !config.has_auth_token() {
        warn!("AUTH_TOKEN is not set — all protected endpoints will return 401");
    }

    let state = AppState {
        config: Arc::new(config),
        spam: Arc::new(SpamEvaluator::new()?),
    };

    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Safegate validators listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Assemble the full route table.
///
/// Public for integration tests, which drive the router directly via
/// tower::ServiceExt without binding a socket.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.max_body_bytes;

    // Evaluating endpoints (require valid bearer token)
    let protected_api = Router::new()
        .route(
            "/api/safety-gate/evaluate/spam",
            post(handlers::safety_gate::evaluate_spam),
        )
        .route(
            "/api/safety-gate/evaluate/helpful",
            post(handlers::safety_gate::evaluate_helpful),
        )
        .route(
            "/api/safety-gate/evaluate/safety",
            post(handlers::safety_gate::evaluate_safety),
        )
        .route(
            "/api/authority/validate/awards",
            post(handlers::authority::validate_awards),
        )
        .route(
            "/api/domination/validate/content",
            post(handlers::domination::validate_content),
        )
        .route(
            "/api/gbp-helper/validate/local",
            post(handlers::gbp::validate_local),
        )
        .route(
            "/api/gbp-helper/posts/preview",
            post(handlers::gbp::preview_post),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ));

    // Health and index routes (no auth)
    let public_api = Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/safety-gate/health", get(handlers::safety_gate::health))
        .route("/api/authority/health", get(handlers::authority::health))
        .route("/api/domination/health", get(handlers::domination::health))
        .route("/api/gbp-helper/health", get(handlers::gbp::health));

    Router::new()
        .merge(protected_api)
        .merge(public_api)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health — root health check with the per-group endpoint map.
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "safegate",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
        "endpoints": {
            "safety_gate": "/api/safety-gate/health",
            "authority": "/api/authority/health",
            "domination": "/api/domination/health",
            "gbp_helper": "/api/gbp-helper/health",
        },
    }))
}

/// GET / — service index.
async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": "Safegate Content Validators",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Rule-based SEO/marketing content validation endpoints.",
        "auth": "Bearer token on protected POST endpoints",
        "health": "/health",
    }))
}

/// JSON 404 for unknown routes.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "Not Found",
            "detail": "Endpoint does not exist",
        })),
    )
}

/// Static readiness payload for a per-group health endpoint.
pub fn group_health(service: &str) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true, "service": service }))
}
