//! Per-church PPG attendance-tracking requirement.
//!
//! PPG (Panitia Pembangunan Gereja) tracking can be forced per church through
//! the stored `require_ppg` flag, or rolled out gradually through the remote
//! `"ppg"` feature gate. The stored flag always wins when set to required.

use std::sync::Arc;

use database_layer::Church;
use feature_gate::{GateClient, GateResult};
use tracing::debug;

/// Gate name consulted when the church record does not force PPG.
const PPG_GATE: &str = "ppg";

/// Value of `require_ppg` that forces PPG regardless of the gate.
const REQUIRE_PPG_FORCED: i32 = 1;

/// Decides whether PPG attendance tracking is mandatory for a church.
///
/// The gate capability is injected at construction; the policy holds no other
/// state and re-reads both inputs on every call.
#[derive(Clone)]
pub struct PpgPolicy {
    gate: Arc<dyn GateClient>,
}

impl PpgPolicy {
    pub fn new(gate: Arc<dyn GateClient>) -> Self {
        Self { gate }
    }

    /// Returns whether PPG tracking is required for `church`.
    ///
    /// `require_ppg == 1` decides immediately without consulting the gate.
    /// Otherwise the result is exactly the gate's boolean. A failed gate
    /// lookup is returned to the caller as-is; the policy defines no
    /// fallback, no retry, and no cache.
    pub async fn should_require_ppg(&self, church: &Church) -> GateResult<bool> {
        if church.require_ppg == Some(REQUIRE_PPG_FORCED) {
            debug!(church_code = %church.code, "PPG required by church configuration");
            return Ok(true);
        }

        let enabled = self.gate.check_gate(PPG_GATE).await?;
        debug!(church_code = %church.code, gate = PPG_GATE, enabled, "PPG gate evaluated");
        Ok(enabled)
    }
}
