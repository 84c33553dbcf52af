//! UART transmitter testbench CLI.
//!
//! This binary wires the harness together: it builds the bundled transmitter
//! model, attaches a VCD trace sink unless disabled, runs the clock driver
//! loop, and prints the one-line result (cycle count, received byte in hex,
//! frame-error flag).

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use uarttb_core::common::HarnessError;
use uarttb_core::dut::{Dut, UartTxTb};
use uarttb_core::trace::VcdTrace;
use uarttb_core::{Config, Session};

#[derive(Parser, Debug)]
#[command(
    name = "uart_tb",
    version,
    about = "Cycle-accurate test harness for a simulated UART transmitter",
    long_about = "Drives the simulated uart_tx_tb module one clock cycle at a time, \
records a VCD waveform, and polls received_valid. When the receive side has \
captured a frame, prints the cycle count, the received byte (hex), and the \
frame-error flag.\n\nExamples:\n  uart_tb\n  uart_tb --byte 0x55 --trace out.vcd\n  \
uart_tb --no-trace --max-cycles 100000"
)]
struct Cli {
    /// VCD trace output path (default: uart_tx.vcd).
    #[arg(long)]
    trace: Option<String>,

    /// Disable waveform tracing.
    #[arg(long)]
    no_trace: bool,

    /// Payload byte for the bundled transmitter model.
    #[arg(long, value_parser = parse_byte)]
    byte: Option<u8>,

    /// Abort after this many cycles without received_valid.
    ///
    /// Unset matches the original harness: the loop never terminates if the
    /// model never asserts valid.
    #[arg(long)]
    max_cycles: Option<u64>,

    /// JSON configuration file; flags override its values.
    #[arg(long)]
    config: Option<String>,
}

/// Parses a payload byte in decimal or `0x` hex.
fn parse_byte(s: &str) -> Result<u8, String> {
    let parsed = s
        .strip_prefix("0x")
        .map_or_else(|| s.parse(), |hex| u8::from_str_radix(hex, 16));
    parsed.map_err(|e| format!("invalid byte `{s}`: {e}"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&Cli::parse()) {
        eprintln!("uart_tb: {e}");
        process::exit(1);
    }
}

/// Builds the session from config plus flags, runs it, prints the summary.
fn run(cli: &Cli) -> Result<(), HarnessError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(byte) = cli.byte {
        config.dut.payload = byte;
    }
    if cli.no_trace {
        config.trace.enabled = false;
    } else if let Some(path) = &cli.trace {
        config.trace.path.clone_from(path);
    }
    if cli.max_cycles.is_some() {
        config.run.max_cycles = cli.max_cycles;
    }

    let model = UartTxTb::from_config(&config.dut);

    let mut session = Session::new(model);
    if config.trace.enabled {
        let model_name = session.model().name().to_string();
        let sink = VcdTrace::open(&config.trace.path, &model_name)?;
        session = session.with_trace(Box::new(sink));
    }
    if let Some(limit) = config.run.max_cycles {
        session = session.with_max_cycles(limit);
    }

    let summary = session.run()?;
    summary.print();
    Ok(())
}
