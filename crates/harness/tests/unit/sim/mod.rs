//! Unit tests for the simulation session.

/// Driver loop termination, cycle counting, and watchdog tests.
pub mod driver_loop;
