//! Job submission endpoint.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use qrelay_adapter_ibm::SamplerJobRequest;
use qrelay_circuit::{CircuitSpec, CircuitStyle, MAX_QUBITS, MIN_QUBITS};

use crate::dto::{SubmitRequest, SubmitResponse, non_empty};
use crate::error::ApiError;
use crate::state::AppState;

const SUBMIT_FALLBACK: &str = "Failed to submit job to IBM Quantum";

/// POST /api/quantum/submit - Synthesize a circuit and submit it as a Sampler job.
pub async fn submit(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitRequest>, JsonRejection>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let token = non_empty(&req.api_token)
        .ok_or_else(|| ApiError::BadRequest("IBM Quantum API token required".to_string()))?;

    let qubits_error =
        || ApiError::BadRequest(format!("Qubits must be between {MIN_QUBITS}-{MAX_QUBITS}"));
    let qubits = req.qubits.ok_or_else(qubits_error)?;
    let style = CircuitStyle::from_name(req.style.as_deref());
    let spec = CircuitSpec::new(qubits, style).map_err(|_| qubits_error())?;

    let config = &state.config;
    let request = SamplerJobRequest::new(
        config.backend.clone(),
        config.instance.clone(),
        vec![spec.synthesize()],
        config.shots,
    );

    let job = state
        .client
        .submit_sampler_job(token, &request)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "IBM Quantum submission failed");
            ApiError::from_ibm(&e, SUBMIT_FALLBACK)
        })?;

    tracing::info!(
        job_id = %job.id,
        qubits = spec.num_qubits(),
        style = %spec.style(),
        backend = %config.backend,
        "Submitted sampler job"
    );

    Ok(Json(SubmitResponse {
        job_id: job.id,
        status: "queued".to_string(),
        backend: config.backend.clone(),
        estimated_wait: config.estimated_wait.clone(),
    }))
}
