//! Error types for the gateway API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use qrelay_adapter_ibm::IbmError;
use serde::Serialize;

/// API error type that converts to HTTP responses.
///
/// The `Display` text is the client-facing message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Remote(String),
}

impl ApiError {
    /// Map an IBM client failure.
    ///
    /// Caller input the client refused to send is a 400. Everything else is a
    /// 500, preferring the message the remote service supplied, then
    /// `fallback` for bodies without one.
    pub fn from_ibm(err: &IbmError, fallback: &str) -> Self {
        match err {
            IbmError::InvalidJobId(_) | IbmError::InvalidToken => {
                ApiError::BadRequest(err.to_string())
            }
            IbmError::ApiError { .. } => {
                ApiError::Remote(err.remote_message().unwrap_or(fallback).to_string())
            }
            other => ApiError::Remote(other.to_string()),
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Remote(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}
