//! UART transmitter testbench harness library.
//!
//! This crate drives a simulated UART transmitter module cycle by cycle and
//! reports what the far end received. It provides:
//! 1. **DUT seam:** The [`Dut`](dut::Dut) trait over the simulated module
//!    (settable clock, `eval`, and the `received_valid`/`received_data`/
//!    `frame_error` outputs).
//! 2. **Trace:** A [`TraceSink`](trace::TraceSink) trait and a VCD writer for
//!    waveform inspection.
//! 3. **Simulation:** The [`Session`] owning the model and trace sink, the
//!    clock driver loop, and the run summary.
//! 4. **Configuration:** Defaults and JSON-deserializable overrides.
//!
//! The UART framing itself lives inside the simulated module; the harness is
//! a sequential driver loop over it and defines no protocol logic of its own.

/// Common types shared across the harness (constants, errors, signal frames).
pub mod common;
/// Harness configuration (defaults and JSON-deserializable structures).
pub mod config;
/// Device-under-test seam and the bundled behavioral transmitter model.
pub mod dut;
/// Simulation session and clock driver loop.
pub mod sim;
/// Waveform trace sinks (VCD).
pub mod trace;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Simulation session; owns the model, the optional trace sink, and the cycle counter.
pub use crate::sim::Session;
/// Outputs read after the driver loop exits (cycle count, byte, frame error).
pub use crate::sim::RunSummary;
