//! API endpoint handlers.

pub mod health;
pub mod results;
pub mod status;
pub mod submit;

use crate::error::ApiError;

/// Fallback for routes hit with an unsupported HTTP method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
