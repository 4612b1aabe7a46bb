//! # Prometheus Coalesce
//!
//! A cancellable burst-coalescing call scheduler for AI agent workloads.
//!
//! This library provides a per-instance debounce/coalescing primitive built on
//! structured concurrency. It accepts a stream of calls to an async action,
//! coalesces bursts into at most one execution per quiet period, and guarantees
//! that a superseded pending execution is cancelled before a new one is
//! scheduled.
//!
//! ## Core Problem Solved
//!
//! Agent workloads generate bursty call patterns that are wasteful to execute
//! one-for-one:
//!
//! - **Chatty Upstreams**: UI events, file watchers, and streaming model output
//!   produce many calls where only the latest matters
//! - **Expensive Actions**: Persisting state, re-indexing, or re-planning per
//!   call wastes compute when calls arrive milliseconds apart
//! - **Stale Work**: An execution scheduled for an earlier call must never
//!   clobber the effect of a later one
//!
//! ## Key Features
//!
//! - **Trailing Coalescing**: A burst of calls closer together than the quiet
//!   period produces exactly one execution, with the last call's arguments
//! - **Leading Mode**: The first call of a burst fires immediately; later calls
//!   in the same burst are absorbed
//! - **Guaranteed Cancellation**: A new call cancels the outstanding pending
//!   execution before anything else observes it
//! - **Runtime-Agnostic Spawning**: Executions run on any [`core::Spawn`]
//!   implementation; a Tokio adapter ships behind the `tokio-runtime` feature
//!
//! ## Coalescer - Burst Coalescing
//!
//! ```rust,ignore
//! use prometheus_coalesce::config::CoalesceMode;
//! use prometheus_coalesce::core::{Coalescer, FnAction};
//! use prometheus_coalesce::runtime::TokioSpawner;
//! use std::time::Duration;
//!
//! let action = FnAction::new(|args: (u32, u32)| async move {
//!     Ok(args.0 + args.1)
//! });
//!
//! let coalescer = Coalescer::new(action, Duration::from_millis(1000), TokioSpawner::current())
//!     .with_mode(CoalesceMode::Trailing);
//!
//! // Await settlement of this call's execution
//! let outcome = coalescer.invoke((5, 6)).await?;
//!
//! // Or fire-and-forget: dropping the settlement does not cancel
//! let settlement = coalescer.call((7, 8));
//! drop(settlement);
//! ```
//!
//! For complete examples, see:
//! - `tests/coalescer_burst_test.rs` - Full integration tests
//! - `README.md` - Comprehensive documentation

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core coalescing abstractions: actions, the coalescer, errors, stats.
pub mod core;
/// Configuration models for coalescer instances.
pub mod config;
/// Builders to construct coalescers from configuration.
#[cfg(feature = "tokio-runtime")]
pub mod builders;
/// Runtime adapters and API surface.
#[cfg(feature = "tokio-runtime")]
pub mod runtime;
/// Shared utilities.
pub mod util;
