//! Common utilities and types used throughout the testbench harness.
//!
//! This module provides building blocks shared across the harness components:
//! 1. **Constants:** Trace timebase constants tying cycle indices to timestamps.
//! 2. **Error Handling:** The harness error taxonomy.
//! 3. **Signal Frames:** Snapshots of the DUT's observable signals for tracing.

/// Trace timebase constants.
pub mod constants;

/// Error types for trace I/O, configuration, and watchdog expiry.
pub mod error;

/// Signal snapshot handed from the DUT to the trace sink.
pub mod signal;

pub use constants::{HIGH_PHASE_OFFSET, TICKS_PER_CYCLE};
pub use error::HarnessError;
pub use signal::SignalFrame;
