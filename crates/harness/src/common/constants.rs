//! Trace timebase constants.
//!
//! The waveform trace places both phases of every clock cycle on a fixed
//! grid: the low phase of cycle N lands at `N * TICKS_PER_CYCLE` and the
//! high phase at `N * TICKS_PER_CYCLE + HIGH_PHASE_OFFSET`. Downstream
//! waveform viewers rely on the timestamps being strictly increasing, which
//! holds as long as `HIGH_PHASE_OFFSET < TICKS_PER_CYCLE`.

/// Trace timestamp ticks spanned by one full clock cycle.
pub const TICKS_PER_CYCLE: u64 = 10;

/// Offset of the high-phase trace sample within a cycle.
pub const HIGH_PHASE_OFFSET: u64 = 5;
