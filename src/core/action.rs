//! Action traits and closure adapter for coalesced invocation.

use std::future::Future;

use async_trait::async_trait;

use super::AppResult;

/// Abstraction for the async action a coalescer drives.
///
/// The action holds the actual business logic behind the coalesced calls.
/// It receives the arguments `A` of the winning call and returns a result `T`,
/// or an error that is surfaced to the awaiting caller.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use prometheus_coalesce::core::{AppResult, CoalesceAction};
///
/// #[derive(Clone)]
/// struct PersistState;
///
/// #[async_trait]
/// impl CoalesceAction<(u32, u32), u32> for PersistState {
///     async fn run(&self, args: (u32, u32)) -> AppResult<u32> {
///         Ok(args.0 + args.1)
///     }
/// }
/// ```
#[async_trait]
pub trait CoalesceAction<A, T>: Send + Sync + Clone + 'static
where
    A: Send + 'static,
    T: Send + 'static,
{
    /// Run the action with the arguments of the call that won the burst.
    ///
    /// # Arguments
    ///
    /// * `args` - The arguments captured from the winning call
    ///
    /// # Returns
    ///
    /// The action's result, delivered to the caller awaiting settlement.
    async fn run(&self, args: A) -> AppResult<T>;
}

/// Adapter turning an async closure into a [`CoalesceAction`].
///
/// # Example
///
/// ```rust,ignore
/// use prometheus_coalesce::core::FnAction;
///
/// let action = FnAction::new(|args: (u32, u32)| async move {
///     Ok(args.0 + args.1)
/// });
/// ```
#[derive(Clone)]
pub struct FnAction<F> {
    f: F,
}

impl<F> FnAction<F> {
    /// Wrap an async closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F, Fut, A, T> CoalesceAction<A, T> for FnAction<F>
where
    F: Fn(A) -> Fut + Send + Sync + Clone + 'static,
    Fut: Future<Output = AppResult<T>> + Send + 'static,
    A: Send + 'static,
    T: Send + 'static,
{
    async fn run(&self, args: A) -> AppResult<T> {
        (self.f)(args).await
    }
}
