//! Core coalescing abstractions: errors, actions, the coalescer, counters.

pub mod error;
pub mod action;
pub mod stats;
#[cfg(feature = "tokio-runtime")]
pub mod coalescer;

pub use error::{AppResult, CoalesceError};
pub use action::{CoalesceAction, FnAction};
pub use stats::{CoalescerStats, StatCounters};
#[cfg(feature = "tokio-runtime")]
pub use coalescer::{Coalescer, FireOutcome, Settlement, Spawn};
