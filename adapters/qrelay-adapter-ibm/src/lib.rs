//! IBM Quantum adapter for qrelay.
//!
//! Provides a thin client for the IBM Quantum Runtime REST API and the
//! normalization of Sampler quasi-distributions into measurement lists.
//!
//! # Example
//!
//! ```rust,no_run
//! use qrelay_adapter_ibm::{DEFAULT_ENDPOINT, IbmClient, Instance, SamplerJobRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = IbmClient::new(DEFAULT_ENDPOINT)?;
//! let request = SamplerJobRequest::new(
//!     "ibm_brisbane",
//!     Instance::default(),
//!     vec![qasm_source()],
//!     1000,
//! );
//! let job = client.submit_sampler_job("my-token", &request).await?;
//!
//! let raw = client.get_job_results("my-token", &job.id).await?;
//! let result = qrelay_adapter_ibm::normalize(&raw, 1000)?;
//! println!("{} qubits, {} measurements", result.qubits, result.measurements.len());
//! # Ok(())
//! # }
//! # fn qasm_source() -> String { String::new() }
//! ```

pub mod api;
pub mod error;
pub mod normalize;

pub use api::{
    DEFAULT_BACKEND, DEFAULT_ENDPOINT, IbmClient, Instance, JobState, JobStatus,
    JobStatusResponse, SamplerJobRequest, SubmitResponse,
};
pub use error::{IbmError, IbmResult};
pub use normalize::{DEFAULT_QUBITS, DistributionLocation, NormalizedResult, normalize};
