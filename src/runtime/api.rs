//! API-facing request/response models.

use serde::{Deserialize, Serialize};

use crate::config::{CoalesceMode, SchedulerConfig};
use crate::core::{CoalesceAction, Coalescer, Spawn};

/// Invocation submission payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeSubmission<A> {
    /// Target coalescer name.
    pub coalescer: String,
    /// Arguments forwarded to the action if this call wins its burst.
    pub args: A,
    /// Submission time (ms since epoch).
    pub submitted_at_ms: u128,
}

/// Invocation report returned once a submission settles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvokeReport {
    /// Target coalescer name.
    pub coalescer: String,
    /// Whether this submission's execution ran the action.
    pub fired: bool,
    /// Action error, when the execution failed.
    pub error: Option<String>,
}

/// Coalescer snapshot data for listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoalescerSnapshot {
    /// Coalescer identifier.
    pub name: String,
    /// Quiet period in milliseconds.
    pub quiet_period_ms: u64,
    /// Edge selection.
    pub mode: CoalesceMode,
}

/// Health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Healthy flag.
    pub ok: bool,
}

/// Drive a coalescer from a submission and await its settlement.
/// Caller manages coalescer lookup by name.
pub async fn invoke_with<A, T, X, S>(
    coalescer: &Coalescer<A, T, X, S>,
    req: InvokeSubmission<A>,
) -> InvokeReport
where
    A: Send + 'static,
    T: Send + 'static,
    X: CoalesceAction<A, T>,
    S: Spawn,
{
    match coalescer.invoke(req.args).await {
        Ok(outcome) => InvokeReport {
            coalescer: req.coalescer,
            fired: outcome.is_fired(),
            error: None,
        },
        Err(e) => InvokeReport {
            coalescer: req.coalescer,
            fired: false,
            error: Some(e.to_string()),
        },
    }
}

/// Build coalescer listings from config snapshot.
pub fn list_coalescers(cfg: &SchedulerConfig) -> Vec<CoalescerSnapshot> {
    cfg.coalescers
        .iter()
        .map(|(name, coalescer)| CoalescerSnapshot {
            name: name.clone(),
            quiet_period_ms: coalescer.quiet_period_ms,
            mode: coalescer.mode,
        })
        .collect()
}

/// Return a health payload.
pub fn health() -> Health {
    Health { ok: true }
}
