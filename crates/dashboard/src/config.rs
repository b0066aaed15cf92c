//! Controller configuration.

use impact_types::{ANONYMOUS, LIVES_UNIT};
use serde::{Deserialize, Serialize};

/// Configuration for a dashboard instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Simulated processing time before a donation is applied (default: 500)
    pub processing_delay_ms: u64,
    /// Visible entries in the recent-donations log (default: 6)
    pub recent_capacity: usize,
    /// Rupees per life impacted (default: 25.0)
    pub lives_unit: f64,
    /// Username rendered at startup (default: "anonymous")
    pub initial_username: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: 500,
            recent_capacity: 6,
            lives_unit: LIVES_UNIT,
            initial_username: ANONYMOUS.to_string(),
        }
    }
}
