//! Data Transfer Objects for the gateway API.
//!
//! Field names follow the camelCase JSON contract clients already use.

use qrelay_adapter_ibm::{JobStatus, NormalizedResult};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ============================================================================
// Requests
// ============================================================================

/// POST /api/quantum/submit body.
///
/// Every field is optional at the serde level so that missing values are
/// reported with the gateway's own 400 messages.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    /// Number of qubits.
    #[serde(default)]
    pub qubits: Option<i64>,
    /// Circuit style name.
    #[serde(default)]
    pub style: Option<String>,
    /// Caller's IBM Quantum token.
    #[serde(default)]
    pub api_token: Option<String>,
}

/// Query for GET /api/quantum/status and /api/quantum/results.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobQuery {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub api_token: Option<String>,
}

impl JobQuery {
    /// Both parameters, non-empty, as `(job_id, api_token)`.
    pub fn require(&self) -> Result<(&str, &str), ApiError> {
        match (non_empty(&self.job_id), non_empty(&self.api_token)) {
            (Some(job_id), Some(token)) => Ok((job_id, token)),
            _ => Err(ApiError::BadRequest(
                "Missing jobId or apiToken".to_string(),
            )),
        }
    }
}

/// Borrow an optional string, treating `""` as absent.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// ============================================================================
// Responses
// ============================================================================

/// Response to a successful submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub job_id: String,
    /// Always `"queued"` on submission.
    pub status: String,
    pub backend: String,
    pub estimated_wait: String,
}

/// Job status relayed from the runtime.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub job_id: String,
    pub status: Option<JobStatus>,
    /// `null` when the runtime reports no position (or position 0).
    pub queue_position: Option<u64>,
    pub backend: String,
}

/// Normalized job results.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsResponse {
    pub job_id: String,
    pub backend: String,
    /// RFC 3339 creation time from the runtime, or the time of this response.
    pub timestamp: String,
    #[serde(flatten)]
    pub result: NormalizedResult,
}

/// GET /api/health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
