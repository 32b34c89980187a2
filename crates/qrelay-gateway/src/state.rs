//! Application state for the gateway server.

use qrelay_adapter_ibm::{IbmClient, IbmResult};

use crate::config::GatewayConfig;

/// Shared, read-only application state.
///
/// Holds no per-job data; every request is served from its own inputs.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Gateway configuration.
    pub config: GatewayConfig,
    /// IBM Quantum Runtime client (connection pool only, no credentials).
    pub client: IbmClient,
}

impl AppState {
    /// Create application state, building a client for the configured endpoint.
    pub fn new(config: GatewayConfig) -> IbmResult<Self> {
        let client = IbmClient::new(config.endpoint.clone())?;
        Ok(Self { config, client })
    }
}
