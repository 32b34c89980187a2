//! qrelay gateway - HTTP facade over IBM Quantum Sampler jobs.
//!
//! Clients submit a qubit count and circuit style, poll job status and fetch
//! normalized measurement results, passing their own IBM Quantum token with
//! each request. The gateway synthesizes the OpenQASM program, relays one
//! call per request to the runtime and keeps no job state.
//!
//! # Endpoints
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | `POST` | `/api/quantum/submit` | `{qubits, style?, apiToken}` → job handle |
//! | `GET` | `/api/quantum/status` | `?jobId&apiToken` → runtime status |
//! | `GET` | `/api/quantum/results` | `?jobId&apiToken` → measurements and probabilities |
//! | `GET` | `/api/health` | liveness |
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use qrelay_gateway::{AppState, GatewayConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = GatewayConfig::default();
//!     let bind = config.bind_address;
//!     let state = Arc::new(AppState::new(config)?);
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(bind).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod server;
pub mod state;
pub mod tracing_config;

pub use config::{ConfigError, GatewayConfig, LoggingConfig};
pub use dto::{
    HealthResponse, JobQuery, ResultsResponse, StatusResponse, SubmitRequest, SubmitResponse,
};
pub use error::ApiError;
pub use server::create_router;
pub use state::AppState;
pub use tracing_config::{TracingConfig, TracingFormat, init_tracing};
