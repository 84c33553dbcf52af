//! # Driver Loop Tests
//!
//! Tests for the polling loop's termination condition, the at-least-one-cycle
//! policy, cycle counting, and the opt-in watchdog.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::mocks::MockDut;
use uarttb_core::Session;
use uarttb_core::common::HarnessError;

#[test]
fn runs_one_cycle_even_when_valid_at_reset() {
    crate::common::init_tracing();
    // Valid is high before the first tick; the loop must still execute one
    // full cycle before reading the outputs.
    let mut session = Session::new(MockDut::valid_at_reset().with_data(0x7F));
    let summary = session.run().unwrap();
    assert_eq!(summary.cycles, 1);
    assert_eq!(summary.received, 0x7F);
    assert_eq!(session.model().rising_edges(), 1);
}

#[test]
fn valid_at_cycle_12_reports_13_cycles() {
    let mut session = Session::new(MockDut::valid_at_cycle(12));
    let summary = session.run().unwrap();
    assert_eq!(summary.cycles, 13);
}

#[rstest]
#[case(0, 1)]
#[case(1, 2)]
#[case(99, 100)]
fn cycle_count_is_valid_cycle_plus_one(#[case] valid_at: u64, #[case] expected: u64) {
    let mut session = Session::new(MockDut::valid_at_cycle(valid_at));
    let summary = session.run().unwrap();
    assert_eq!(summary.cycles, expected);
}

#[test]
fn counter_increments_by_one_per_tick() {
    let mut session = Session::new(MockDut::never_valid());
    for expected in 1..=10 {
        session.tick().unwrap();
        assert_eq!(session.cycles(), expected);
    }
}

#[test]
fn one_rising_edge_per_cycle() {
    let mut session = Session::new(MockDut::never_valid());
    for _ in 0..25 {
        session.tick().unwrap();
    }
    assert_eq!(session.model().rising_edges(), 25);
}

#[test]
fn watchdog_expires_when_valid_never_asserts() {
    let mut session = Session::new(MockDut::never_valid()).with_max_cycles(50);
    let err = session.run().unwrap_err();
    assert!(matches!(err, HarnessError::Watchdog { cycles: 50 }));
    assert_eq!(session.cycles(), 50);
}

#[test]
fn watchdog_does_not_fire_when_valid_in_time() {
    let mut session = Session::new(MockDut::valid_at_cycle(12)).with_max_cycles(50);
    let summary = session.run().unwrap();
    assert_eq!(summary.cycles, 13);
}

#[test]
fn summary_reads_model_outputs() {
    let model = MockDut::valid_at_cycle(3).with_data(0xA5).with_frame_error();
    let mut session = Session::new(model);
    let summary = session.run().unwrap();
    assert_eq!(summary.received, 0xA5);
    assert!(summary.frame_error);
}
