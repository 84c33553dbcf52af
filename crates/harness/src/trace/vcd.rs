//! Minimal Value Change Dump (VCD) writer.
//!
//! Writes a standard VCD document for the five observable signals of the
//! DUT: the header and variable declarations at open, a full `$dumpvars`
//! image at the first sample, then only changed values at each subsequent
//! timestamp. Output is buffered; [`flush`](TraceSink::flush) pushes samples
//! to disk so a partial waveform survives an aborted run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::common::{HarnessError, SignalFrame};
use crate::trace::TraceSink;

/// VCD identifier codes for the traced signals.
const ID_CLK: char = '!';
const ID_TX: char = '"';
const ID_VALID: char = '#';
const ID_FERR: char = '$';
const ID_DATA: char = '%';

/// VCD trace sink writing to a file.
#[derive(Debug)]
pub struct VcdTrace {
    writer: BufWriter<File>,
    /// Frame recorded at the previous dump; `None` until `$dumpvars`.
    last: Option<SignalFrame>,
}

impl VcdTrace {
    /// Opens `path` for writing and emits the VCD header, declaring the
    /// traced signals under a module scope named `scope`.
    pub fn open(path: impl AsRef<Path>, scope: &str) -> Result<Self, HarnessError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "$timescale 1ns $end")?;
        writeln!(writer, "$scope module {scope} $end")?;
        writeln!(writer, "$var wire 1 {ID_CLK} clk $end")?;
        writeln!(writer, "$var wire 1 {ID_TX} tx $end")?;
        writeln!(writer, "$var wire 1 {ID_VALID} received_valid $end")?;
        writeln!(writer, "$var wire 1 {ID_FERR} frame_error $end")?;
        writeln!(writer, "$var wire 8 {ID_DATA} received_data [7:0] $end")?;
        writeln!(writer, "$upscope $end")?;
        writeln!(writer, "$enddefinitions $end")?;

        Ok(Self { writer, last: None })
    }

    fn write_scalar(&mut self, id: char, level: bool) -> Result<(), HarnessError> {
        writeln!(self.writer, "{}{id}", u8::from(level))?;
        Ok(())
    }

    fn write_vector(&mut self, id: char, value: u8) -> Result<(), HarnessError> {
        writeln!(self.writer, "b{value:08b} {id}")?;
        Ok(())
    }

    /// Emits every signal of `frame`, unconditionally.
    fn write_full(&mut self, frame: &SignalFrame) -> Result<(), HarnessError> {
        self.write_scalar(ID_CLK, frame.clk)?;
        self.write_scalar(ID_TX, frame.tx)?;
        self.write_scalar(ID_VALID, frame.received_valid)?;
        self.write_scalar(ID_FERR, frame.frame_error)?;
        self.write_vector(ID_DATA, frame.received_data)?;
        Ok(())
    }

    /// Emits only the signals that differ from `prev`.
    fn write_changes(&mut self, prev: SignalFrame, frame: &SignalFrame) -> Result<(), HarnessError> {
        if frame.clk != prev.clk {
            self.write_scalar(ID_CLK, frame.clk)?;
        }
        if frame.tx != prev.tx {
            self.write_scalar(ID_TX, frame.tx)?;
        }
        if frame.received_valid != prev.received_valid {
            self.write_scalar(ID_VALID, frame.received_valid)?;
        }
        if frame.frame_error != prev.frame_error {
            self.write_scalar(ID_FERR, frame.frame_error)?;
        }
        if frame.received_data != prev.received_data {
            self.write_vector(ID_DATA, frame.received_data)?;
        }
        Ok(())
    }
}

impl TraceSink for VcdTrace {
    fn dump(&mut self, timestamp: u64, frame: &SignalFrame) -> Result<(), HarnessError> {
        writeln!(self.writer, "#{timestamp}")?;
        match self.last {
            None => {
                writeln!(self.writer, "$dumpvars")?;
                self.write_full(frame)?;
                writeln!(self.writer, "$end")?;
            }
            Some(prev) => self.write_changes(prev, frame)?,
        }
        self.last = Some(*frame);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), HarnessError> {
        self.writer.flush()?;
        Ok(())
    }
}

impl Drop for VcdTrace {
    /// Best-effort flush so the file is usable even without an explicit
    /// final flush.
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
