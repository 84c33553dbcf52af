//! Configuration system for the testbench harness.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline constants (trace path, payload byte, bit timing).
//! 2. **Structures:** Hierarchical config for the run, the trace, and the DUT.
//! 3. **Loading:** JSON deserialization from a file, or `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::HarnessError;

/// Default configuration constants for the harness.
mod defaults {
    /// Path of the waveform trace file.
    ///
    /// Matches the fixed path the original testbench always wrote to.
    pub const TRACE_PATH: &str = "uart_tx.vcd";

    /// Payload byte handed to the bundled transmitter model (`'A'`).
    pub const PAYLOAD: u8 = 0x41;

    /// Clock cycles per UART bit period in the bundled model.
    ///
    /// Small on purpose: a full 10-bit frame completes in well under a
    /// hundred cycles, keeping traces readable and tests fast.
    pub const CLOCKS_PER_BIT: u32 = 4;

    /// Idle (line high) cycles the bundled model holds before the start bit.
    pub const IDLE_CYCLES: u32 = 2;
}

/// Root configuration structure for a harness run.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use uarttb_core::Config;
///
/// let config = Config::default();
/// assert!(config.trace.enabled);
/// assert_eq!(config.dut.payload, 0x41);
/// ```
///
/// Deserializing overrides from JSON:
///
/// ```
/// use uarttb_core::Config;
///
/// let json = r#"{
///     "run": { "max_cycles": 100000 },
///     "trace": { "enabled": false },
///     "dut": { "payload": 85, "clocks_per_bit": 16 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.run.max_cycles, Some(100_000));
/// assert!(!config.trace.enabled);
/// assert_eq!(config.dut.payload, 0x55);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Driver loop settings.
    pub run: RunConfig,
    /// Waveform trace settings.
    pub trace: TraceConfig,
    /// Bundled DUT model settings.
    pub dut: DutConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| HarnessError::Config {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Driver loop settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Abort the run after this many cycles without `received_valid`.
    ///
    /// `None` preserves the original unbounded polling loop: if the DUT
    /// never asserts valid, the run does not terminate.
    pub max_cycles: Option<u64>,
}

/// Waveform trace settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Record a waveform trace at all.
    pub enabled: bool,
    /// Path of the VCD file to write.
    pub path: String,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: defaults::TRACE_PATH.to_string(),
        }
    }
}

/// Bundled DUT model settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DutConfig {
    /// Byte the transmitter sends.
    pub payload: u8,
    /// Clock cycles per bit period.
    pub clocks_per_bit: u32,
    /// Idle cycles before the start bit.
    pub idle_cycles: u32,
}

impl Default for DutConfig {
    fn default() -> Self {
        Self {
            payload: defaults::PAYLOAD,
            clocks_per_bit: defaults::CLOCKS_PER_BIT,
            idle_cycles: defaults::IDLE_CYCLES,
        }
    }
}
