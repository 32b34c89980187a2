//! Job results endpoint.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::dto::{JobQuery, ResultsResponse};
use crate::error::ApiError;
use crate::state::AppState;

const RESULTS_FALLBACK: &str = "Failed to fetch results";

/// GET /api/quantum/results - Fetch and normalize Sampler results.
pub async fn results(
    State(state): State<Arc<AppState>>,
    query: Result<Query<JobQuery>, QueryRejection>,
) -> Result<Json<ResultsResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let (job_id, token) = query.require()?;

    let raw = state
        .client
        .get_job_results(token, job_id)
        .await
        .map_err(|e| {
            tracing::error!(%job_id, error = %e, "Results fetch failed");
            ApiError::from_ibm(&e, RESULTS_FALLBACK)
        })?;

    let result = qrelay_adapter_ibm::normalize(&raw, state.config.shots).map_err(|e| {
        tracing::error!(%job_id, error = %e, "Results normalization failed");
        ApiError::from_ibm(&e, RESULTS_FALLBACK)
    })?;
    tracing::debug!(
        %job_id,
        qubits = result.qubits,
        outcomes = result.probabilities.len(),
        measurements = result.measurements.len(),
        "Normalized results"
    );

    Ok(Json(ResultsResponse {
        job_id: string_field(&raw, "job_id").unwrap_or(job_id).to_string(),
        backend: string_field(&raw, "backend")
            .map_or_else(|| state.config.backend.clone(), str::to_string),
        timestamp: string_field(&raw, "created").map_or_else(
            || Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            str::to_string,
        ),
        result,
    }))
}

/// A non-empty string field of the payload.
fn string_field<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
