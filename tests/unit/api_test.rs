//! Tests for the API surface

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use prometheus_coalesce::config::{CoalesceMode, CoalescerConfig, SchedulerConfig};
use prometheus_coalesce::core::{AppResult, CoalesceAction, Coalescer, Spawn};
use prometheus_coalesce::runtime::{health, invoke_with, list_coalescers, InvokeSubmission};
use prometheus_coalesce::util::clock::now_ms;

#[derive(Clone)]
struct SumAction;

#[async_trait]
impl CoalesceAction<(u32, u32), u32> for SumAction {
    async fn run(&self, args: (u32, u32)) -> AppResult<u32> {
        Ok(args.0 + args.1)
    }
}

#[derive(Clone)]
struct FailingAction;

#[async_trait]
impl CoalesceAction<(u32, u32), u32> for FailingAction {
    async fn run(&self, _args: (u32, u32)) -> AppResult<u32> {
        anyhow::bail!("downstream unavailable")
    }
}

#[derive(Clone)]
struct TestSpawner;

impl Spawn for TestSpawner {
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tokio::spawn(fut);
    }
}

#[tokio::test]
async fn test_invoke_with_reports_fired() {
    let coalescer = Coalescer::new(SumAction, Duration::from_millis(10), TestSpawner);

    let report = invoke_with(
        &coalescer,
        InvokeSubmission {
            coalescer: "sum".to_string(),
            args: (1u32, 2u32),
            submitted_at_ms: now_ms(),
        },
    )
    .await;

    assert_eq!(report.coalescer, "sum");
    assert!(report.fired);
    assert!(report.error.is_none());
}

#[tokio::test]
async fn test_invoke_with_reports_action_error() {
    let coalescer = Coalescer::new(FailingAction, Duration::from_millis(10), TestSpawner);

    let report = invoke_with(
        &coalescer,
        InvokeSubmission {
            coalescer: "flaky".to_string(),
            args: (1u32, 2u32),
            submitted_at_ms: now_ms(),
        },
    )
    .await;

    assert!(!report.fired);
    let error = report.error.expect("error populated");
    assert!(error.contains("downstream unavailable"));
}

#[test]
fn test_list_coalescers_snapshots_config() {
    let mut coalescers = HashMap::new();
    coalescers.insert(
        "save_state".to_string(),
        CoalescerConfig {
            quiet_period_ms: 1000,
            mode: CoalesceMode::Leading,
        },
    );
    let cfg = SchedulerConfig { coalescers };

    let snapshots = list_coalescers(&cfg);
    assert_eq!(snapshots.len(), 1);
    assert_eq!(snapshots[0].name, "save_state");
    assert_eq!(snapshots[0].quiet_period_ms, 1000);
    assert_eq!(snapshots[0].mode, CoalesceMode::Leading);
}

#[test]
fn test_health() {
    assert!(health().ok);
}
