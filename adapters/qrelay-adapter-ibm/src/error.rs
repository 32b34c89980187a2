//! Error types for the IBM Quantum adapter.

use thiserror::Error;

/// Result type for IBM operations.
pub type IbmResult<T> = Result<T, IbmError>;

/// Errors that can occur when talking to IBM Quantum.
#[derive(Debug, Error)]
pub enum IbmError {
    /// Token cannot be carried in an HTTP header.
    #[error("Invalid IBM Quantum API token")]
    InvalidToken,

    /// Endpoint is not a usable base URL.
    #[error("Invalid IBM Quantum endpoint: {0}")]
    InvalidEndpoint(String),

    /// Job id that cannot be addressed as a single path segment.
    #[error("Invalid job id: {0:?}")]
    InvalidJobId(String),

    /// HTTP request failed (connection, TLS, body read).
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API answered with a non-success status.
    #[error(
        "IBM Quantum API error ({status}): {}",
        .message.as_deref().unwrap_or("no message")
    )]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Error code from the API body, if any.
        code: Option<String>,
        /// Error message from the API body, if any.
        message: Option<String>,
    },

    /// Response body was not the expected JSON.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Result distribution expands to more measurements than allowed.
    #[error("Result distribution expands beyond {limit} measurements")]
    TooManyMeasurements {
        /// Measurement limit for the configured shot count.
        limit: u64,
    },
}

impl IbmError {
    /// Message supplied by the remote service, if this error carries one.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            IbmError::ApiError { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_token_display() {
        let err = IbmError::InvalidToken;
        assert!(err.to_string().contains("Invalid"));
    }

    #[test]
    fn test_api_error_display() {
        let err = IbmError::ApiError {
            status: 401,
            code: Some("ERR_401".into()),
            message: Some("Unauthorized".into()),
        };
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("Unauthorized"));
    }

    #[test]
    fn test_api_error_no_message_display() {
        let err = IbmError::ApiError {
            status: 502,
            code: None,
            message: None,
        };
        assert!(err.to_string().contains("no message"));
    }

    #[test]
    fn test_remote_message() {
        let err = IbmError::ApiError {
            status: 400,
            code: None,
            message: Some("Job not found".into()),
        };
        assert_eq!(err.remote_message(), Some("Job not found"));

        let err = IbmError::ApiError {
            status: 400,
            code: None,
            message: None,
        };
        assert_eq!(err.remote_message(), None);
        assert_eq!(IbmError::InvalidToken.remote_message(), None);
    }

    #[test]
    fn test_invalid_job_id_display() {
        let err = IbmError::InvalidJobId("..".into());
        assert_eq!(err.to_string(), "Invalid job id: \"..\"");
    }

    #[test]
    fn test_json_error_from() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: IbmError = parse.into();
        assert!(err.to_string().starts_with("JSON error"));
    }
}
