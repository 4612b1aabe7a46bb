//! Tests for configuration validation

use std::time::Duration;

use prometheus_coalesce::config::{CoalesceMode, CoalescerConfig, SchedulerConfig};

#[test]
fn test_coalescer_config_validation() {
    let valid = CoalescerConfig {
        quiet_period_ms: 1000,
        mode: CoalesceMode::Trailing,
    };
    assert!(valid.validate().is_ok());
}

#[test]
fn test_coalescer_config_invalid_quiet_period() {
    let invalid = CoalescerConfig {
        quiet_period_ms: 0,
        mode: CoalesceMode::Trailing,
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_coalescer_config_quiet_period_duration() {
    let config = CoalescerConfig {
        quiet_period_ms: 250,
        mode: CoalesceMode::Leading,
    };
    assert_eq!(config.quiet_period(), Duration::from_millis(250));
}

#[test]
fn test_scheduler_config_validation() {
    let mut coalescers = std::collections::HashMap::new();
    coalescers.insert(
        "save_state".to_string(),
        CoalescerConfig {
            quiet_period_ms: 1000,
            mode: CoalesceMode::Trailing,
        },
    );

    let config = SchedulerConfig { coalescers };
    assert!(config.validate().is_ok());
}

#[test]
fn test_scheduler_config_empty_coalescers() {
    let config = SchedulerConfig {
        coalescers: std::collections::HashMap::new(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_scheduler_config_invalid_entry_named() {
    let mut coalescers = std::collections::HashMap::new();
    coalescers.insert(
        "bad".to_string(),
        CoalescerConfig {
            quiet_period_ms: 0,
            mode: CoalesceMode::Trailing,
        },
    );

    let config = SchedulerConfig { coalescers };
    let err = config.validate().unwrap_err();
    assert!(err.contains("coalescer `bad` invalid"));
}

#[test]
fn test_scheduler_config_from_json() {
    let json = r#"{
        "coalescers": {
            "save_state": {
                "quiet_period_ms": 1000,
                "mode": "leading"
            }
        }
    }"#;

    let config = SchedulerConfig::from_json_str(json).unwrap();
    assert_eq!(
        config.coalescers["save_state"].mode,
        CoalesceMode::Leading
    );
}

#[test]
fn test_scheduler_config_mode_defaults_to_trailing() {
    let json = r#"{
        "coalescers": {
            "save_state": {
                "quiet_period_ms": 1000
            }
        }
    }"#;

    let config = SchedulerConfig::from_json_str(json).unwrap();
    assert_eq!(
        config.coalescers["save_state"].mode,
        CoalesceMode::Trailing
    );
}

#[test]
fn test_scheduler_config_parse_error() {
    let result = SchedulerConfig::from_json_str("not json");
    assert!(result.unwrap_err().contains("parse error"));
}
