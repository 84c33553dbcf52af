//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization, and file loading.

use pretty_assertions::assert_eq;
use uarttb_core::Config;
use uarttb_core::common::HarnessError;

#[test]
fn config_default() {
    let config = Config::default();
    assert_eq!(config.run.max_cycles, None);
    assert!(config.trace.enabled);
    assert_eq!(config.trace.path, "uart_tx.vcd");
    assert_eq!(config.dut.payload, 0x41);
    assert_eq!(config.dut.clocks_per_bit, 4);
    assert_eq!(config.dut.idle_cycles, 2);
}

#[test]
fn config_partial_json_keeps_defaults() {
    let config: Config = serde_json::from_str(r#"{ "dut": { "payload": 85 } }"#).unwrap();
    assert_eq!(config.dut.payload, 0x55);
    assert_eq!(config.dut.clocks_per_bit, 4);
    assert!(config.trace.enabled);
}

#[test]
fn config_full_json_overrides() {
    let json = r#"{
        "run": { "max_cycles": 100000 },
        "trace": { "enabled": false, "path": "waves.vcd" },
        "dut": { "payload": 255, "clocks_per_bit": 16, "idle_cycles": 8 }
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    assert_eq!(config.run.max_cycles, Some(100_000));
    assert!(!config.trace.enabled);
    assert_eq!(config.trace.path, "waves.vcd");
    assert_eq!(config.dut.payload, 0xFF);
    assert_eq!(config.dut.clocks_per_bit, 16);
    assert_eq!(config.dut.idle_cycles, 8);
}

#[test]
fn config_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("harness.json");
    std::fs::write(&path, r#"{ "run": { "max_cycles": 500 } }"#).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.run.max_cycles, Some(500));
}

#[test]
fn config_load_rejects_bad_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, HarnessError::Config { .. }));
}

#[test]
fn config_load_missing_file_is_io_error() {
    let err = Config::load("/nonexistent/harness.json").unwrap_err();
    assert!(matches!(err, HarnessError::Io(_)));
}
