// API error type — every failure surfaces as a machine-readable JSON body.
//
// The four client-visible kinds mirror the validation surface: missing
// content and malformed payloads are the caller's fault, unauthorized is
// an auth failure, and anything unexpected is a generic 500 that never
// leaks internals.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::evaluator::MissingContent;

#[derive(Debug)]
pub enum ApiError {
    /// Empty or whitespace-only content on a content-evaluating endpoint.
    MissingContent,
    /// Bad or missing bearer token.
    Unauthorized,
    /// Body not decodable as the expected structure.
    MalformedPayload(String),
    /// Body exceeded the configured size cap.
    PayloadTooLarge,
    /// Unexpected internal fault. Logged; the caller sees a generic message.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            ApiError::MissingContent => (
                StatusCode::BAD_REQUEST,
                "Missing content",
                Some("Content is empty after trimming".to_string()),
            ),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                Some("Valid bearer token required".to_string()),
            ),
            ApiError::MalformedPayload(detail) => {
                (StatusCode::BAD_REQUEST, "Malformed payload", Some(detail))
            }
            ApiError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large", None),
            ApiError::Internal(err) => {
                error!(error = %err, "Unhandled error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
            }
        };

        let mut body = serde_json::json!({ "error": message });
        if let Some(detail) = detail {
            body["detail"] = serde_json::json!(detail);
        }
        (status, Json(body)).into_response()
    }
}

impl From<MissingContent> for ApiError {
    fn from(_: MissingContent) -> Self {
        ApiError::MissingContent
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // The body-limit layer surfaces as a length-limit rejection here.
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::MalformedPayload(rejection.body_text())
        }
    }
}
