//! Per-coalescer counters and snapshots.

use std::sync::atomic::{AtomicU64, Ordering};

/// Point-in-time snapshot of a coalescer's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CoalescerStats {
    /// Calls received via `invoke` or `call`.
    pub calls: u64,
    /// Executions that ran the action to completion.
    pub fired: u64,
    /// Calls that settled without their own execution.
    pub superseded: u64,
    /// Executions whose action returned an error.
    pub action_errors: u64,
}

/// Lock-free counters backing [`CoalescerStats`].
///
/// Counters use relaxed ordering; snapshots are advisory and never
/// participate in scheduling decisions.
#[derive(Debug, Default)]
pub struct StatCounters {
    calls: AtomicU64,
    fired: AtomicU64,
    superseded: AtomicU64,
    action_errors: AtomicU64,
}

impl StatCounters {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a call arriving.
    pub fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an execution running the action to completion.
    pub fn record_fired(&self) {
        self.fired.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a call settling without its own execution.
    pub fn record_superseded(&self) {
        self.superseded.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an action error.
    pub fn record_action_error(&self) {
        self.action_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time snapshot.
    pub fn snapshot(&self) -> CoalescerStats {
        CoalescerStats {
            calls: self.calls.load(Ordering::Relaxed),
            fired: self.fired.load(Ordering::Relaxed),
            superseded: self.superseded.load(Ordering::Relaxed),
            action_errors: self.action_errors.load(Ordering::Relaxed),
        }
    }
}
