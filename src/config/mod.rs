//! Configuration models for coalescer instances.

pub mod coalescer;

pub use coalescer::{CoalesceMode, CoalescerConfig, SchedulerConfig};
