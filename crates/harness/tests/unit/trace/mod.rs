//! Unit tests for waveform tracing.
