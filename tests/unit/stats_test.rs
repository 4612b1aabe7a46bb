//! Tests for coalescer counters

use prometheus_coalesce::core::{CoalescerStats, StatCounters};

#[test]
fn test_counters_start_at_zero() {
    let counters = StatCounters::new();
    assert_eq!(counters.snapshot(), CoalescerStats::default());
}

#[test]
fn test_counters_accumulate() {
    let counters = StatCounters::new();
    counters.record_call();
    counters.record_call();
    counters.record_call();
    counters.record_fired();
    counters.record_superseded();
    counters.record_superseded();
    counters.record_action_error();

    let stats = counters.snapshot();
    assert_eq!(stats.calls, 3);
    assert_eq!(stats.fired, 1);
    assert_eq!(stats.superseded, 2);
    assert_eq!(stats.action_errors, 1);
}

#[test]
fn test_snapshot_is_point_in_time() {
    let counters = StatCounters::new();
    counters.record_call();
    let before = counters.snapshot();
    counters.record_call();
    let after = counters.snapshot();

    assert_eq!(before.calls, 1);
    assert_eq!(after.calls, 2);
}
