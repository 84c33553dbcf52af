//! Simulation session and clock driver loop.
//!
//! Owns the DUT and the optional trace sink side by side, steps the clock
//! one cycle at a time, and polls the DUT's valid output for completion.

/// Session, driver loop, and run summary.
pub mod session;

pub use session::{RunSummary, Session};
