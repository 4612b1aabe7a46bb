//! Runtime adapters and API surface.

pub mod api;
pub mod tokio_spawner;

pub use api::{
    health, invoke_with, list_coalescers, CoalescerSnapshot, Health, InvokeReport,
    InvokeSubmission,
};
pub use tokio_spawner::TokioSpawner;
