//! IBM Quantum Runtime API client.
//!
//! Covers the three calls the gateway relays:
//! - submitting a Sampler job (`POST /jobs`)
//! - reading job state (`GET /jobs/{id}`)
//! - fetching raw job results (`GET /jobs/{id}/results`)
//!
//! The client holds no credentials. Every call takes the caller's token and
//! sends it as a bearer header on that request only.

use std::fmt;

use reqwest::{Client, RequestBuilder, Response, Url, header};
use serde::{Deserialize, Serialize};

use crate::error::{IbmError, IbmResult};

/// IBM Quantum Runtime endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.quantum-computing.ibm.com/runtime";

/// Backend targeted when none is configured.
pub const DEFAULT_BACKEND: &str = "ibm_brisbane";

/// Runtime program used for all submissions.
pub const SAMPLER_PROGRAM_ID: &str = "sampler";

/// User-Agent sent with requests.
const USER_AGENT: &str = concat!("qrelay/", env!("CARGO_PKG_VERSION"));

/// IBM Quantum Runtime API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct IbmClient {
    /// HTTP client.
    client: Client,
    /// API endpoint URL, without trailing slash.
    endpoint: Url,
}

impl fmt::Debug for IbmClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IbmClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl IbmClient {
    /// Create a client for the given runtime endpoint.
    ///
    /// No request timeout is configured; transport defaults apply.
    pub fn new(endpoint: impl Into<String>) -> IbmResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        let endpoint: String = endpoint.into();
        let endpoint = Url::parse(endpoint.trim_end_matches('/'))
            .map_err(|e| IbmError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        if endpoint.cannot_be_a_base() {
            return Err(IbmError::InvalidEndpoint(endpoint.to_string()));
        }

        Ok(Self { client, endpoint })
    }

    /// API endpoint URL.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// `{endpoint}/jobs[/{job_id}][/results]`, each segment percent-encoded.
    fn jobs_url(&self, job_id: Option<&str>, results: bool) -> IbmResult<Url> {
        if let Some(id @ ("." | "..")) = job_id {
            return Err(IbmError::InvalidJobId(id.to_string()));
        }

        let mut url = self.endpoint.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| IbmError::InvalidEndpoint(self.endpoint.to_string()))?;
            segments.pop_if_empty().push("jobs");
            if let Some(id) = job_id {
                segments.push(id);
            }
            if results {
                segments.push("results");
            }
        }
        Ok(url)
    }

    /// Submit a Sampler job.
    pub async fn submit_sampler_job(
        &self,
        token: &str,
        request: &SamplerJobRequest,
    ) -> IbmResult<SubmitResponse> {
        let url = self.jobs_url(None, false)?;
        tracing::debug!(%url, backend = %request.backend, "submitting sampler job");

        let response = authorized(self.client.post(url), token)?
            .json(request)
            .send()
            .await?;

        parse_json(response).await
    }

    /// Get job state.
    pub async fn get_job(&self, token: &str, job_id: &str) -> IbmResult<JobStatusResponse> {
        let url = self.jobs_url(Some(job_id), false)?;
        tracing::debug!(%url, "fetching job status");

        let response = authorized(self.client.get(url), token)?.send().await?;

        parse_json(response).await
    }

    /// Get raw job results.
    ///
    /// The body is returned untouched; see [`crate::normalize`] for turning it
    /// into measurements.
    pub async fn get_job_results(&self, token: &str, job_id: &str) -> IbmResult<serde_json::Value> {
        let url = self.jobs_url(Some(job_id), true)?;
        tracing::debug!(%url, "fetching job results");

        let response = authorized(self.client.get(url), token)?.send().await?;

        parse_json(response).await
    }
}

fn authorized(builder: RequestBuilder, token: &str) -> IbmResult<RequestBuilder> {
    let mut value = header::HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| IbmError::InvalidToken)?;
    value.set_sensitive(true);
    Ok(builder.header(header::AUTHORIZATION, value))
}

/// Decode a success body, or turn a failure body into [`IbmError::ApiError`].
async fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> IbmResult<T> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let error: ApiErrorResponse = serde_json::from_slice(&body).unwrap_or_default();
        return Err(IbmError::ApiError {
            status: status.as_u16(),
            code: error.code,
            message: error.message.filter(|m| !m.is_empty()),
        });
    }

    serde_json::from_slice(&body).map_err(IbmError::from)
}

// ============================================================================
// Request types
// ============================================================================

/// Hub/group/project triple selecting the IBM Quantum instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Hub name.
    pub hub: String,
    /// Group name.
    pub group: String,
    /// Project name.
    pub project: String,
}

impl Default for Instance {
    fn default() -> Self {
        Self {
            hub: "ibm-q".to_string(),
            group: "open".to_string(),
            project: "main".to_string(),
        }
    }
}

/// Sampler job request.
#[derive(Debug, Clone, Serialize)]
pub struct SamplerJobRequest {
    /// Program ID.
    pub program_id: String,
    /// Backend name.
    pub backend: String,
    /// Instance (hub/group/project), flattened into the request.
    #[serde(flatten)]
    pub instance: Instance,
    /// Sampler parameters.
    pub params: SamplerParams,
}

impl SamplerJobRequest {
    /// Build a sampler request for the given circuits.
    pub fn new(
        backend: impl Into<String>,
        instance: Instance,
        circuits: Vec<String>,
        shots: u32,
    ) -> Self {
        Self {
            program_id: SAMPLER_PROGRAM_ID.to_string(),
            backend: backend.into(),
            instance,
            params: SamplerParams { circuits, shots },
        }
    }
}

/// Sampler primitive parameters.
#[derive(Debug, Clone, Serialize)]
pub struct SamplerParams {
    /// OpenQASM circuits.
    pub circuits: Vec<String>,
    /// Number of shots.
    pub shots: u32,
}

// ============================================================================
// Response types
// ============================================================================

/// API error body.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Job submission response.
#[derive(Debug, Deserialize)]
pub struct SubmitResponse {
    /// Job ID.
    pub id: String,
}

/// Job state response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobStatusResponse {
    /// Job ID.
    #[serde(default)]
    pub id: Option<String>,
    /// Job state: a bare status name, or an object with status and reason.
    #[serde(default)]
    pub state: Option<JobState>,
    /// Top-level status (older payloads).
    #[serde(default)]
    pub status: Option<String>,
    /// Position in the backend queue.
    #[serde(default)]
    pub position: Option<u64>,
    /// Backend name.
    #[serde(default)]
    pub backend: Option<String>,
}

/// Job state as reported by the runtime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum JobState {
    /// `"state": "QUEUED"`
    Name(String),
    /// `"state": {"status": "Failed", "reason": "..."}`
    Detail {
        /// Status string.
        status: String,
    },
}

impl JobStatusResponse {
    /// Job status, preferring `state` over the top-level `status`.
    pub fn job_status(&self) -> Option<JobStatus> {
        let raw = match &self.state {
            Some(JobState::Name(name)) => Some(name.as_str()),
            Some(JobState::Detail { status }) => Some(status.as_str()),
            None => self.status.as_deref(),
        };
        raw.map(JobStatus::parse)
    }
}

/// Runtime job status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Queued,
    Validating,
    Running,
    Completed,
    Failed,
    Cancelled,
    /// Any status this client does not know, uppercased.
    Other(String),
}

impl JobStatus {
    /// Parse a runtime status name, case-insensitively.
    pub fn parse(raw: &str) -> Self {
        let upper = raw.to_uppercase();
        match upper.as_str() {
            "QUEUED" => JobStatus::Queued,
            "VALIDATING" => JobStatus::Validating,
            "RUNNING" => JobStatus::Running,
            "COMPLETED" | "DONE" => JobStatus::Completed,
            "FAILED" | "ERROR" => JobStatus::Failed,
            "CANCELLED" => JobStatus::Cancelled,
            _ => JobStatus::Other(upper),
        }
    }

    /// Uppercase status name.
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Queued => "QUEUED",
            JobStatus::Validating => "VALIDATING",
            JobStatus::Running => "RUNNING",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Failed => "FAILED",
            JobStatus::Cancelled => "CANCELLED",
            JobStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for JobStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
