use std::sync::Arc;

use anyhow::Result;
use database_layer::{build_repository, DatabaseConfig, ScheduleRepository};
use feature_gate::{GateClient, HttpGateClient, StaticGateClient};
use tracing::{info, warn};

use crate::services::PpgPolicy;

/// Main Paroki server state
#[derive(Clone)]
pub struct ParokiServer {
    /// Server configuration
    pub config: ServerConfig,
    /// Scheduling repository
    pub repository: Arc<dyn ScheduleRepository>,
    /// Feature gate client
    pub gate_client: Arc<dyn GateClient>,
    /// PPG requirement policy
    pub ppg_policy: PpgPolicy,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server name
    pub name: String,
    /// Maximum concurrent connections
    pub max_connections: usize,
    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "Paroki Engine".to_string(),
            max_connections: 1000,
            request_timeout: 30,
        }
    }
}

impl ParokiServer {
    /// Create a new Paroki server instance from environment configuration
    pub async fn new() -> Result<Self> {
        let config = ServerConfig::default();

        let database_config = DatabaseConfig::from_env()?;
        let repository = build_repository(&database_config).await?;

        let gate_client = Self::initialize_gate_client();

        Ok(Self::new_with_deps(config, repository, gate_client))
    }

    /// Create a server instance from pre-built collaborators.
    /// This is useful for testing.
    pub fn new_with_deps(
        config: ServerConfig,
        repository: Arc<dyn ScheduleRepository>,
        gate_client: Arc<dyn GateClient>,
    ) -> Self {
        let ppg_policy = PpgPolicy::new(gate_client.clone());

        Self {
            config,
            repository,
            gate_client,
            ppg_policy,
        }
    }

    /// Build the gate client from the environment.
    ///
    /// Falls back to a static client with every gate disabled when no gate
    /// service is configured, so schedule management keeps working without
    /// one.
    fn initialize_gate_client() -> Arc<dyn GateClient> {
        match HttpGateClient::from_env() {
            Ok(client) => {
                info!("Feature gate client initialized from GATE_SERVICE_URL");
                Arc::new(client)
            }
            Err(e) => {
                warn!(
                    "No gate service configured ({}); using static gate client with 'ppg' disabled",
                    e
                );
                Arc::new(StaticGateClient::new().with_gate("ppg", false))
            }
        }
    }
}

impl std::fmt::Debug for ParokiServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParokiServer")
            .field("config", &self.config)
            .finish()
    }
}
