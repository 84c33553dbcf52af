//! Device-under-test seam.
//!
//! This module defines the [`Dut`] trait the harness drives. It provides:
//! 1. **Clocking:** A settable clock level and an `eval` step that settles
//!    the model's logic for the current level.
//! 2. **Outputs:** The `received_valid`, `received_data`, and `frame_error`
//!    signals the driver loop polls and reports.
//! 3. **Tracing:** A [`SignalFrame`] snapshot for the waveform sink.
//!
//! The harness treats implementors as opaque: all framing and timing logic
//! belongs to the model, never to the driver loop.

use crate::common::SignalFrame;

/// UART transmitter testbench model.
pub mod uart_tx;

pub use uart_tx::UartTxTb;

/// Trait for simulated modules driven by the clock driver loop.
///
/// Mirrors the surface of a cycle-accurate simulator's generated model: the
/// harness sets the clock, calls [`eval`](Dut::eval), and reads output
/// signals. State may only advance inside `eval`.
pub trait Dut {
    /// Returns a short name for this model (e.g. `"uart_tx_tb"`), used as
    /// the module scope in waveform traces.
    fn name(&self) -> &str;

    /// Sets the clock input level. Takes effect at the next [`eval`](Dut::eval).
    fn set_clk(&mut self, level: bool);

    /// Settles the model's logic for the current clock level.
    ///
    /// Sequential state advances on the rising edge; repeated calls at the
    /// same level are idempotent.
    fn eval(&mut self);

    /// High once the model's receive side has captured a complete frame.
    fn received_valid(&self) -> bool;

    /// Byte captured by the receive side; meaningful once
    /// [`received_valid`](Dut::received_valid) is high.
    fn received_data(&self) -> u8;

    /// High when the captured frame had a framing fault (bad stop bit).
    fn frame_error(&self) -> bool;

    /// Snapshots the observable signals for the trace sink.
    fn signals(&self) -> SignalFrame;
}
