//! Signal snapshot handed from the DUT to the trace sink.
//!
//! The trace sink never holds a reference into the model; at each dump point
//! the session reads a [`SignalFrame`] out of the DUT and passes it by value.
//! This keeps the model and the sink independently owned by the session.

/// Snapshot of the DUT's observable signals at one trace sample point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignalFrame {
    /// Clock level driven by the harness.
    pub clk: bool,
    /// Serial transmit line as driven by the DUT.
    pub tx: bool,
    /// High once the DUT's receiver has captured a full frame.
    pub received_valid: bool,
    /// Byte captured by the DUT's receiver (valid once `received_valid` is high).
    pub received_data: u8,
    /// High when the captured frame had a bad stop bit.
    pub frame_error: bool,
}
