// Router composition tests — full request/response flow through the Axum
// router, without binding a socket. tower::ServiceExt::oneshot drives each
// request independently; the service is stateless, so every test builds a
// fresh router.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use safegate::config::Config;
use safegate::evaluator::spam::SpamEvaluator;
use safegate::web::{build_router, AppState};

const TEST_TOKEN: &str = "test-token-123";

fn test_router() -> Router {
    test_router_with_body_limit(1024 * 1024)
}

fn test_router_with_body_limit(max_body_bytes: usize) -> Router {
    let config = Config {
        auth_token: TEST_TOKEN.to_string(),
        port: 0,
        max_body_bytes,
    };
    build_router(AppState {
        config: Arc::new(config),
        spam: Arc::new(SpamEvaluator::new().unwrap()),
    })
}

async fn get(router: Router, path: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    into_json(response).await
}

async fn post_json(
    router: Router,
    path: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let response = router
        .oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap();
    into_json(response).await
}

async fn into_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

// ============================================================
// Health and index
// ============================================================

#[tokio::test]
async fn root_health_is_public() {
    let (status, body) = get(test_router(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["service"], json!("safegate"));
    assert_eq!(body["endpoints"]["safety_gate"], json!("/api/safety-gate/health"));
}

#[tokio::test]
async fn group_health_endpoints_are_public() {
    for (path, service) in [
        ("/api/safety-gate/health", "safety_gate"),
        ("/api/authority/health", "authority"),
        ("/api/domination/health", "domination"),
        ("/api/gbp-helper/health", "gbp_helper"),
    ] {
        let (status, body) = get(test_router(), path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body["ok"], json!(true));
        assert_eq!(body["service"], json!(service));
    }
}

#[tokio::test]
async fn unknown_route_returns_json_404() {
    let (status, body) = get(test_router(), "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Not Found"));
}

// ============================================================
// Authentication
// ============================================================

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let (status, body) = post_json(
        test_router(),
        "/api/safety-gate/evaluate/spam",
        None,
        json!({ "content": "hello there friend" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("Unauthorized"));
}

#[tokio::test]
async fn wrong_token_is_unauthorized() {
    let (status, _) = post_json(
        test_router(),
        "/api/safety-gate/evaluate/spam",
        Some("not-the-token"),
        json!({ "content": "hello there friend" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn empty_configured_token_rejects_even_empty_bearer() {
    let config = Config {
        auth_token: String::new(),
        port: 0,
        max_body_bytes: 1024,
    };
    let router = build_router(AppState {
        config: Arc::new(config),
        spam: Arc::new(SpamEvaluator::new().unwrap()),
    });
    let (status, _) = post_json(
        router,
        "/api/safety-gate/evaluate/spam",
        Some(""),
        json!({ "content": "hello" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ============================================================
// Safety gate: spam / helpful / safety
// ============================================================

#[tokio::test]
async fn spam_endpoint_flags_loaded_text() {
    let (status, body) = post_json(
        test_router(),
        "/api/safety-gate/evaluate/spam",
        Some(TEST_TOKEN),
        json!({ "content": "BUY NOW!!! Call us at 555-123-4567, visit www.example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], json!("spam"));
    assert!(body["score"].as_f64().unwrap() >= 0.5);
    assert_eq!(body["signals"]["boost"], json!(0.45));
    assert_eq!(body["signals"]["caps_run"], json!(true));
    assert_eq!(body["signals"]["punctuation_run"], json!(true));
    assert_eq!(body["signals"]["link"], json!(true));
    assert_eq!(body["signals"]["phone"], json!(true));
}

#[tokio::test]
async fn spam_endpoint_passes_clean_text() {
    let (status, body) = post_json(
        test_router(),
        "/api/safety-gate/evaluate/spam",
        Some(TEST_TOKEN),
        json!({ "content": "Our team replaced a failing compressor and restored cooling within two hours." }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], json!("not_spam"));
    assert_eq!(body["score"], json!(0.0));
    assert_eq!(body["signals"]["base_score"], json!(0.0));
    assert_eq!(body["signals"]["boost"], json!(0.0));
}

#[tokio::test]
async fn spam_scores_are_rounded_to_two_decimals() {
    // One phrase present: base = 1/5 = 0.2, plus the phrase-hit boost unit
    // and a link unit: 0.2 + 0.30 = 0.5
    let (status, body) = post_json(
        test_router(),
        "/api/safety-gate/evaluate/spam",
        Some(TEST_TOKEN),
        json!({ "content": "discount at www.example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], json!(0.5));
    assert_eq!(body["signals"]["base_score"], json!(0.2));
    assert_eq!(body["signals"]["boost"], json!(0.3));
}

#[tokio::test]
async fn content_endpoints_reject_empty_content() {
    for path in [
        "/api/safety-gate/evaluate/spam",
        "/api/safety-gate/evaluate/helpful",
        "/api/safety-gate/evaluate/safety",
    ] {
        let (status, body) = post_json(
            test_router(),
            path,
            Some(TEST_TOKEN),
            json!({ "content": "   " }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(body["error"], json!("Missing content"), "{path}");
    }
}

#[tokio::test]
async fn content_endpoints_reject_missing_field() {
    let (status, body) = post_json(
        test_router(),
        "/api/safety-gate/evaluate/spam",
        Some(TEST_TOKEN),
        json!({}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Missing content"));
}

#[tokio::test]
async fn helpful_endpoint_scores_word_count() {
    let (status, body) = post_json(
        test_router(),
        "/api/safety-gate/evaluate/helpful",
        Some(TEST_TOKEN),
        json!({ "content": "Bleed the lines, check static pressure, then recharge the system." }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], json!("helpful"));
    assert_eq!(body["score"], json!(0.82));

    let (_, short) = post_json(
        test_router(),
        "/api/safety-gate/evaluate/helpful",
        Some(TEST_TOKEN),
        json!({ "content": "too short" }),
    )
    .await;
    assert_eq!(short["label"], json!("not_helpful"));
    assert_eq!(short["score"], json!(0.35));
}

#[tokio::test]
async fn safety_endpoint_returns_placeholder() {
    let (status, body) = post_json(
        test_router(),
        "/api/safety-gate/evaluate/safety",
        Some(TEST_TOKEN),
        json!({ "content": "a perfectly ordinary sentence" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], json!("safe"));
    assert_eq!(body["score"], json!(0.99));
}

// ============================================================
// Structural checks over HTTP
// ============================================================

#[tokio::test]
async fn awards_check_boundaries() {
    for (n, expected) in [(0, false), (1, false), (2, true), (5, true)] {
        let links: Vec<String> = (0..n).map(|i| format!("https://example.com/{i}")).collect();
        let (status, body) = post_json(
            test_router(),
            "/api/authority/validate/awards",
            Some(TEST_TOKEN),
            json!({ "external_links": links }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["passed"], json!(expected), "{n} links");
        assert_eq!(body["detail"]["has_external_validation"], json!(expected));
    }
}

#[tokio::test]
async fn sections_check_counts_truthy_entries() {
    let mut sections = serde_json::Map::new();
    for i in 0..10 {
        sections.insert(format!("s{i}"), json!(true));
    }
    sections.insert("falsy_a".into(), json!(false));
    sections.insert("falsy_b".into(), json!(""));

    let (status, body) = post_json(
        test_router(),
        "/api/domination/validate/content",
        Some(TEST_TOKEN),
        json!({ "sections": sections }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["passed"], json!(true));
    assert_eq!(body["detail"]["sections_present"], json!(10));
}

#[tokio::test]
async fn local_relevance_check_over_http() {
    let (status, body) = post_json(
        test_router(),
        "/api/gbp-helper/validate/local",
        Some(TEST_TOKEN),
        json!({
            "content": "Book your Riverside AC inspection before summer.",
            "cities": ["Riverside", "Corona"],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["passed"], json!(true));
    assert_eq!(body["detail"]["mentions_city"], json!(true));
    assert_eq!(body["detail"]["has_call_to_action"], json!(true));
}

#[tokio::test]
async fn post_preview_fills_defaults() {
    let (status, body) = post_json(
        test_router(),
        "/api/gbp-helper/posts/preview",
        Some(TEST_TOKEN),
        json!({ "body": "Spring maintenance special." }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], json!(true));
    assert_eq!(body["post"]["title"], json!("Untitled"));
    assert_eq!(body["post"]["utm"]["source"], json!("gbp"));
}

// ============================================================
// Error surface
// ============================================================

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let router = test_router();
    let request = Request::builder()
        .method("POST")
        .uri("/api/safety-gate/evaluate/spam")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {TEST_TOKEN}"))
        .body(Body::from("{not valid json"))
        .unwrap();
    let (status, body) = into_json(router.oneshot(request).await.unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Malformed payload"));
}

#[tokio::test]
async fn oversized_payload_is_rejected_with_413() {
    let router = test_router_with_body_limit(256);
    let big_content = "x".repeat(1024);
    let (status, body) = post_json(
        router,
        "/api/safety-gate/evaluate/spam",
        Some(TEST_TOKEN),
        json!({ "content": big_content }),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], json!("Payload Too Large"));
}
