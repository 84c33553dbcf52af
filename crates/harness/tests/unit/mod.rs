//! # Unit Components
//!
//! This module organizes the unit tests for the harness: the configuration
//! layer, the bundled DUT model, the driver loop, and the trace sinks.

/// Unit tests for configuration defaults and JSON deserialization.
pub mod config;


/// Unit tests for the session and clock driver loop.
pub mod sim;

/// Unit tests for trace timestamping and the VCD writer.
pub mod trace;
