//! Mock implementations of the harness seams.



pub use dut::MockDut;
pub use trace::RecordingSink;
