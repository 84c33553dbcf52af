//! Waveform trace sinks.
//!
//! This module defines the seam between the driver loop and waveform
//! recording. It provides:
//! 1. **Sink trait:** `dump` a signal snapshot at a timestamp, `flush` to disk.
//! 2. **VCD writer:** A minimal Value Change Dump implementation.
//!
//! The session owns at most one sink; a run without one records nothing and
//! pays nothing.

use crate::common::{HarnessError, SignalFrame};

/// Value Change Dump writer.
pub mod vcd;

pub use vcd::VcdTrace;

/// Trait for waveform trace sinks attached to a simulation session.
///
/// The session calls [`dump`](TraceSink::dump) twice per clock cycle (low
/// phase, then high phase) with strictly increasing timestamps, and
/// [`flush`](TraceSink::flush) at the end of each cycle.
pub trait TraceSink {
    /// Records the signal values in `frame` at simulation time `timestamp`.
    fn dump(&mut self, timestamp: u64, frame: &SignalFrame) -> Result<(), HarnessError>;

    /// Flushes buffered samples to the underlying storage.
    fn flush(&mut self) -> Result<(), HarnessError>;
}
