//! Burst-coalescing scheduler with cancellable pending executions.

use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::oneshot;
use tokio::time::Instant;

use crate::config::CoalesceMode;
use crate::core::stats::{CoalescerStats, StatCounters};
use crate::core::{CoalesceAction, CoalesceError};

/// Abstraction for spawning execution tasks on a runtime.
pub trait Spawn {
    /// Spawn an async task that returns a future.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// Outcome observed by a caller once its call settles.
#[derive(Debug, PartialEq, Eq)]
pub enum FireOutcome<T> {
    /// This call's execution ran the action and produced a value.
    Fired(T),
    /// This call settled without its own execution: a later call cancelled
    /// its pending execution, or a leading-mode burst absorbed it.
    Superseded,
}

impl<T> FireOutcome<T> {
    /// Whether this outcome carries a fired result.
    pub const fn is_fired(&self) -> bool {
        matches!(self, Self::Fired(_))
    }
}

/// Future handle resolving to the outcome of a single call.
///
/// Dropping a settlement neither cancels nor leaks the execution; only a
/// newer call (or [`Coalescer::shutdown`]) cancels.
pub struct Settlement<T> {
    rx: oneshot::Receiver<Result<FireOutcome<T>, CoalesceError>>,
}

impl<T> Future for Settlement<T> {
    type Output = Result<FireOutcome<T>, CoalesceError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.get_mut().rx)
            .poll(cx)
            .map(|res| res.unwrap_or_else(|_| Err(CoalesceError::ExecutionLost)))
    }
}

/// Cancellable handle to a scheduled-but-not-settled execution.
///
/// At most one exists per coalescer instance. Sending on `cancel` is checked
/// by the execution task with priority over its own timer, so a cancelled
/// execution that is still waiting out its delay never runs the action.
struct PendingExecution {
    seq: u64,
    cancel: oneshot::Sender<()>,
    /// Resolves (by sender drop) when the execution task has fully terminated.
    done: oneshot::Receiver<()>,
}

/// Mutable scheduling state, held behind a single mutex.
struct SchedState {
    pending: Option<PendingExecution>,
    last_call: Option<Instant>,
    next_seq: u64,
}

/// Burst-coalescing call scheduler.
///
/// Accepts a stream of calls to an async action and coalesces bursts into at
/// most one execution per quiet period. In trailing mode (the default) the
/// execution runs after the quiet period with the last call's arguments; in
/// leading mode the first call of a burst fires immediately and later calls
/// in the burst are absorbed.
///
/// A new call always cancels the outstanding pending execution before
/// scheduling its own, so two executions of the wrapped action never run
/// concurrently. Instances are independent; two coalescers over one shared
/// action do not interfere.
pub struct Coalescer<A, T, X, S>
where
    A: Send + 'static,
    T: Send + 'static,
    X: CoalesceAction<A, T>,
{
    quiet_period: Duration,
    mode: CoalesceMode,
    action: X,
    spawner: S,
    /// Single mutex for all scheduling transitions; calls are processed in
    /// lock acquisition order.
    state: Arc<Mutex<SchedState>>,
    counters: Arc<StatCounters>,
    _args_marker: PhantomData<A>,
    _result_marker: PhantomData<T>,
}

impl<A, T, X, S> Coalescer<A, T, X, S>
where
    A: Send + 'static,
    T: Send + 'static,
    X: CoalesceAction<A, T>,
    S: Spawn,
{
    /// Create a trailing-mode coalescer from an action, a quiet period, and
    /// a spawner.
    pub fn new(action: X, quiet_period: Duration, spawner: S) -> Self {
        Self {
            quiet_period,
            mode: CoalesceMode::Trailing,
            action,
            spawner,
            state: Arc::new(Mutex::new(SchedState {
                pending: None,
                last_call: None,
                next_seq: 0,
            })),
            counters: Arc::new(StatCounters::new()),
            _args_marker: PhantomData,
            _result_marker: PhantomData,
        }
    }

    /// Set the coalescing mode.
    pub fn with_mode(mut self, mode: CoalesceMode) -> Self {
        self.mode = mode;
        self
    }

    /// The configured quiet period.
    pub const fn quiet_period(&self) -> Duration {
        self.quiet_period
    }

    /// The configured coalescing mode.
    pub const fn mode(&self) -> CoalesceMode {
        self.mode
    }

    /// Snapshot the instance counters.
    pub fn stats(&self) -> CoalescerStats {
        self.counters.snapshot()
    }

    /// Cancel the outstanding pending execution, if any.
    ///
    /// Callers that dropped their settlement handles have no other way to
    /// stop scheduled work when tearing an instance down.
    pub fn shutdown(&self) {
        let mut state = self.state.lock();
        if let Some(prev) = state.pending.take() {
            tracing::info!("cancelled execution {} on shutdown", prev.seq);
            let _ = prev.cancel.send(());
        }
    }

    /// Submit a call and await its settlement.
    ///
    /// Returns [`FireOutcome::Fired`] with the action's value when this
    /// call's execution ran, [`FireOutcome::Superseded`] when a later call
    /// absorbed it, or [`CoalesceError::Action`] when the action failed.
    /// Action errors surface to this caller only and leave the instance
    /// usable.
    pub async fn invoke(&self, args: A) -> Result<FireOutcome<T>, CoalesceError> {
        self.call(args).await
    }

    /// Submit a call without awaiting settlement.
    ///
    /// The scheduling transition (cancel the superseded execution, establish
    /// the new one) completes before this returns. The returned
    /// [`Settlement`] can be awaited later or dropped outright.
    pub fn call(&self, args: A) -> Settlement<T> {
        self.counters.record_call();

        let (settle_tx, settle_rx) = oneshot::channel();
        let now = Instant::now();

        let mut state = self.state.lock();
        let elapsed = state.last_call.map(|t| now.duration_since(t));
        state.last_call = Some(now);

        // Unconditionally cancel the outstanding execution before anything
        // else observes this call. Its termination receiver is handed to the
        // new execution so action runs never overlap.
        let prev_done = state.pending.take().map(|prev| {
            tracing::debug!("cancelled pending execution {}", prev.seq);
            let _ = prev.cancel.send(());
            prev.done
        });

        let new_burst = elapsed.is_none_or(|e| e > self.quiet_period);

        if self.mode == CoalesceMode::Leading && !new_burst {
            // Mid-burst call in leading mode: the burst's first call already
            // fired, so this call is absorbed and nothing is scheduled.
            drop(state);
            self.counters.record_superseded();
            let _ = settle_tx.send(Ok(FireOutcome::Superseded));
            return Settlement { rx: settle_rx };
        }

        let delay = if self.mode == CoalesceMode::Leading {
            Duration::ZERO
        } else {
            self.quiet_period
        };

        let seq = state.next_seq;
        state.next_seq += 1;

        let (cancel_tx, cancel_rx) = oneshot::channel();
        let (done_tx, done_rx) = oneshot::channel();
        state.pending = Some(PendingExecution {
            seq,
            cancel: cancel_tx,
            done: done_rx,
        });
        drop(state);

        tracing::debug!("scheduled execution {} with delay {:?}", seq, delay);

        let action = self.action.clone();
        let shared = Arc::clone(&self.state);
        let counters = Arc::clone(&self.counters);
        self.spawner.spawn(async move {
            // Dropped when this task terminates, releasing any successor
            // waiting on our `done` receiver.
            let _done_tx = done_tx;

            if let Some(done) = prev_done {
                // Wait for the superseded execution to fully terminate so
                // two action runs can never overlap.
                let _ = done.await;
            }

            let result = run_execution(delay, args, action, cancel_rx).await;

            {
                let mut guard = shared.lock();
                if guard.pending.as_ref().is_some_and(|p| p.seq == seq) {
                    guard.pending = None;
                }
            }

            match &result {
                Ok(FireOutcome::Fired(_)) => {
                    counters.record_fired();
                    tracing::debug!("execution {} fired", seq);
                }
                Ok(FireOutcome::Superseded) => {
                    counters.record_superseded();
                    tracing::debug!("execution {} superseded", seq);
                }
                Err(err) => {
                    counters.record_action_error();
                    tracing::warn!("execution {} action failed: {}", seq, err);
                }
            }

            if settle_tx.send(result).is_err() {
                tracing::debug!("settlement for execution {} dropped", seq);
            }
        });

        Settlement { rx: settle_rx }
    }
}

/// Drive one execution: wait out the delay, then run the action, honoring
/// the cancel signal with priority over both the timer and the action.
async fn run_execution<A, T, X>(
    delay: Duration,
    args: A,
    action: X,
    mut cancel_rx: oneshot::Receiver<()>,
) -> Result<FireOutcome<T>, CoalesceError>
where
    A: Send + 'static,
    T: Send + 'static,
    X: CoalesceAction<A, T>,
{
    tokio::select! {
        biased;
        _ = &mut cancel_rx => return Ok(FireOutcome::Superseded),
        () = tokio::time::sleep(delay) => {}
    }

    tokio::select! {
        biased;
        _ = &mut cancel_rx => Ok(FireOutcome::Superseded),
        res = action.run(args) => match res {
            Ok(value) => Ok(FireOutcome::Fired(value)),
            Err(err) => Err(CoalesceError::Action(err)),
        },
    }
}
