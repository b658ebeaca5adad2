use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{GateError, GateResult};

/// Capability for evaluating a named boolean feature gate.
///
/// Implementations must evaluate the gate fresh on every call; callers own
/// any deadline they need on the lookup.
#[async_trait]
pub trait GateClient: Send + Sync {
    async fn check_gate(&self, gate: &str) -> GateResult<bool>;
}

#[derive(Debug, Deserialize)]
struct GateResponse {
    enabled: bool,
}

/// Gate client backed by the remote gate-evaluation service.
#[derive(Debug, Clone)]
pub struct HttpGateClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpGateClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> GateResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Build the client from `GATE_SERVICE_URL` and optional
    /// `GATE_SERVICE_TOKEN`.
    pub fn from_env() -> GateResult<Self> {
        let base_url = std::env::var("GATE_SERVICE_URL").map_err(|_| {
            GateError::ConfigurationError("GATE_SERVICE_URL must be set".to_string())
        })?;
        let token = std::env::var("GATE_SERVICE_TOKEN").ok();
        Self::new(base_url, token)
    }
}

#[async_trait]
impl GateClient for HttpGateClient {
    async fn check_gate(&self, gate: &str) -> GateResult<bool> {
        let url = format!("{}/gates/{}", self.base_url, gate);
        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(GateError::UnknownGate(gate.to_string()));
        }
        let status = response.status();
        if !status.is_success() {
            return Err(GateError::InvalidResponse(format!(
                "gate service returned HTTP {status}"
            )));
        }

        let body: GateResponse = response
            .json()
            .await
            .map_err(|e| GateError::InvalidResponse(e.to_string()))?;

        debug!(gate = gate, enabled = body.enabled, "gate evaluated");
        Ok(body.enabled)
    }
}

/// In-memory gate client for development and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticGateClient {
    gates: HashMap<String, bool>,
}

impl StaticGateClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gate(mut self, gate: impl Into<String>, enabled: bool) -> Self {
        self.gates.insert(gate.into(), enabled);
        self
    }
}

#[async_trait]
impl GateClient for StaticGateClient {
    async fn check_gate(&self, gate: &str) -> GateResult<bool> {
        self.gates
            .get(gate)
            .copied()
            .ok_or_else(|| GateError::UnknownGate(gate.to_string()))
    }
}
