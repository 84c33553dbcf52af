//! Harness error taxonomy.
//!
//! The original testbench delegated every failure mode to the simulation
//! runtime and relied on process exit for cleanup. Here the failure modes the
//! harness can actually observe are explicit:
//! 1. **I/O:** Opening, writing, or flushing the waveform or config file.
//! 2. **Configuration:** Reading or parsing a JSON config file.
//! 3. **Watchdog:** The polling loop exceeding an opt-in cycle limit.

use thiserror::Error;

/// Errors surfaced by the harness.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// A file could not be opened, read, written, or flushed (waveform
    /// trace or config).
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("config `{path}`: {source}")]
    Config {
        /// Path of the offending config file.
        path: String,
        /// Underlying JSON deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// The driver loop hit the configured cycle limit before the DUT
    /// asserted `received_valid`.
    #[error("watchdog expired after {cycles} cycles without received_valid")]
    Watchdog {
        /// Cycles executed before the watchdog fired.
        cycles: u64,
    },
}
