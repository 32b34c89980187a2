//! Job status endpoint.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::dto::{JobQuery, StatusResponse};
use crate::error::ApiError;
use crate::state::AppState;

const STATUS_FALLBACK: &str = "Failed to fetch job status";

/// GET /api/quantum/status - Relay the runtime's view of a job.
pub async fn status(
    State(state): State<Arc<AppState>>,
    query: Result<Query<JobQuery>, QueryRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let (job_id, token) = query.require()?;

    let job = state.client.get_job(token, job_id).await.map_err(|e| {
        tracing::error!(%job_id, error = %e, "Status check failed");
        ApiError::from_ibm(&e, STATUS_FALLBACK)
    })?;

    let status = job.job_status();
    tracing::debug!(%job_id, status = ?status, "Fetched job status");

    Ok(Json(StatusResponse {
        job_id: job.id.unwrap_or_else(|| job_id.to_string()),
        status,
        queue_position: job.position.filter(|&p| p > 0),
        backend: job
            .backend
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| state.config.backend.clone()),
    }))
}
