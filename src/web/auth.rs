// Auth middleware — bearer-token check on all evaluating endpoints.
//
// The expected token is injected through AppState at startup (from
// AUTH_TOKEN), never read from a global. An empty configured token
// rejects every request: fail closed, not open.
//
// Auth check:
//   extract Authorization header → strip "Bearer " → constant-time compare

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::error::ApiError;
use super::AppState;

/// Axum middleware: reject requests without a valid bearer token with 401.
pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if !has_valid_token(&request, &state.config.auth_token) {
        return ApiError::Unauthorized.into_response();
    }
    next.run(request).await
}

/// Extract and validate the bearer token from the request.
fn has_valid_token(request: &Request, expected: &str) -> bool {
    if expected.is_empty() {
        return false;
    }
    let header = match request.headers().get(header::AUTHORIZATION) {
        Some(v) => match v.to_str() {
            Ok(s) => s,
            Err(_) => return false,
        },
        None => return false,
    };
    let provided = match header.strip_prefix("Bearer ") {
        Some(t) => t,
        None => return false,
    };
    constant_time_eq(provided, expected)
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with_auth(value: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/");
        if let Some(v) = value {
            builder = builder.header(header::AUTHORIZATION, v);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn valid_token_accepted() {
        let req = request_with_auth(Some("Bearer sekrit"));
        assert!(has_valid_token(&req, "sekrit"));
    }

    #[test]
    fn wrong_token_rejected() {
        let req = request_with_auth(Some("Bearer wrong"));
        assert!(!has_valid_token(&req, "sekrit"));
    }

    #[test]
    fn missing_header_rejected() {
        let req = request_with_auth(None);
        assert!(!has_valid_token(&req, "sekrit"));
    }

    #[test]
    fn non_bearer_scheme_rejected() {
        let req = request_with_auth(Some("Basic sekrit"));
        assert!(!has_valid_token(&req, "sekrit"));
    }

    #[test]
    fn empty_configured_token_rejects_everything() {
        let req = request_with_auth(Some("Bearer "));
        assert!(!has_valid_token(&req, ""));
    }

    #[test]
    fn constant_time_eq_basics() {
        assert!(constant_time_eq("abc", "abc"));
        assert!(!constant_time_eq("abc", "abd"));
        assert!(!constant_time_eq("abc", "abcd"));
    }
}
