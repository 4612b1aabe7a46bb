//! Coalescer and scheduler configuration structures.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Edge selection for burst coalescing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoalesceMode {
    /// Fire on the first call of a burst; absorb the rest of the burst.
    Leading,
    /// Fire once after the burst has been quiet for the full quiet period.
    #[default]
    Trailing,
}

/// Configuration for a single coalescer instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoalescerConfig {
    /// Quiet period in milliseconds.
    pub quiet_period_ms: u64,
    /// Edge selection; trailing when omitted.
    #[serde(default)]
    pub mode: CoalesceMode,
}

/// Root scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Map of coalescer name to configuration.
    pub coalescers: HashMap<String, CoalescerConfig>,
}

impl CoalescerConfig {
    /// Validate coalescer configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.quiet_period_ms == 0 {
            return Err("quiet_period_ms must be greater than 0".into());
        }
        Ok(())
    }

    /// The quiet period as a [`Duration`].
    pub const fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.quiet_period_ms)
    }
}

impl SchedulerConfig {
    /// Validate all coalescers and ensure at least one exists.
    pub fn validate(&self) -> Result<(), String> {
        if self.coalescers.is_empty() {
            return Err("at least one coalescer must be defined".into());
        }
        for (name, coalescer) in &self.coalescers {
            coalescer
                .validate()
                .map_err(|e| format!("coalescer `{name}` invalid: {e}"))?;
        }
        Ok(())
    }

    /// Parse scheduler configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: SchedulerConfig =
            serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
