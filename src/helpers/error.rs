use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Every failure the intake endpoint can answer with. Nothing escapes the
/// handler as an unhandled error; each variant maps to one response.
#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Request body is empty")]
    EmptyBody,

    #[error("Missing required reservation fields")]
    MissingFields,

    #[error("Method or path not allowed")]
    RouteNotAllowed,

    #[error("Exception: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for IntakeError {
    fn into_response(self) -> Response {
        let status = match &self {
            IntakeError::EmptyBody | IntakeError::MissingFields => StatusCode::BAD_REQUEST,
            IntakeError::RouteNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            IntakeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
