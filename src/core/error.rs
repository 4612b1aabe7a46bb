//! Error types for coalescer operations.

use thiserror::Error;

/// Errors produced by coalescer components.
#[derive(Debug, Error)]
pub enum CoalesceError {
    /// The wrapped action returned an error.
    #[error("action failed: {0}")]
    Action(#[from] anyhow::Error),
    /// The execution task went away before reporting an outcome.
    #[error("execution lost before settling")]
    ExecutionLost,
    /// Configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
