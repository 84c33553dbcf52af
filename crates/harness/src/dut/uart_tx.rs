//! Behavioral UART transmitter testbench model.
//!
//! Stand-in for the HDL `uart_tx_tb` module the original harness linked
//! against: a transmitter that shifts one 8N1 frame out on `tx`, and a
//! receive sampler that watches the same line and asserts `received_valid`
//! once the frame is captured. The harness only sees this model through the
//! [`Dut`] trait; nothing here leaks into the driver loop.
//!
//! Timing is expressed in clock cycles. After `idle_cycles` of line-high
//! idle, each of the 10 frame bits (start, 8 data LSB-first, stop) is held
//! for `clocks_per_bit` cycles. The sampler detects the high-to-low start
//! transition, waits 1.5 bit periods to hit the middle of data bit 0, then
//! samples one bit period apart; the tenth sample checks the stop bit and
//! raises `frame_error` if the line is low.

use crate::common::SignalFrame;
use crate::config::DutConfig;
use crate::dut::Dut;

/// Bits per 8N1 frame: start + 8 data + stop.
const FRAME_BITS: usize = 10;

/// Number of data bits per frame.
const DATA_BITS: u32 = 8;

/// Receive sampler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RxPhase {
    /// Line idle; waiting for the start edge.
    WaitStart,
    /// Counting cycles since the start edge and sampling mid-bit.
    Sampling {
        /// Rising edges seen since the start edge.
        count: u32,
    },
    /// Frame captured; outputs hold their final values.
    Done,
}

/// Behavioral model of the UART transmitter testbench.
#[derive(Debug)]
pub struct UartTxTb {
    /// Frame on the wire: start, data LSB-first, stop.
    frame: [bool; FRAME_BITS],
    /// Clock cycles each bit is held for.
    clocks_per_bit: u32,
    /// Line-high cycles before the start bit.
    idle_cycles: u64,

    /// Current clock input level.
    clk: bool,
    /// Clock level at the previous `eval`, for edge detection.
    prev_clk: bool,
    /// Rising edges seen since reset.
    ticks: u64,

    /// Serial line as currently driven by the transmit side.
    tx: bool,
    /// Receive sampler state.
    rx: RxPhase,
    /// Data bits assembled by the sampler.
    rx_data: u8,
    /// Captured-frame flag.
    received_valid: bool,
    /// Bad-stop-bit flag.
    frame_error: bool,
}

impl UartTxTb {
    /// Creates a model that transmits `payload` once, starting after
    /// `idle_cycles` cycles of idle line, with `clocks_per_bit` cycles per
    /// bit (clamped to at least 1).
    pub fn new(payload: u8, clocks_per_bit: u32, idle_cycles: u32) -> Self {
        let mut frame = [true; FRAME_BITS];
        frame[0] = false;
        for bit in 0..DATA_BITS {
            frame[1 + bit as usize] = (payload >> bit) & 1 != 0;
        }
        Self {
            frame,
            clocks_per_bit: clocks_per_bit.max(1),
            idle_cycles: u64::from(idle_cycles),
            clk: false,
            prev_clk: false,
            ticks: 0,
            tx: true,
            rx: RxPhase::WaitStart,
            rx_data: 0,
            received_valid: false,
            frame_error: false,
        }
    }

    /// Creates a model from the harness configuration.
    pub fn from_config(config: &DutConfig) -> Self {
        Self::new(config.payload, config.clocks_per_bit, config.idle_cycles)
    }

    /// Forces the stop bit low, so the sampler reports a frame error.
    ///
    /// Fault-injection hook for exercising the `frame_error` path.
    pub fn with_broken_stop_bit(mut self) -> Self {
        self.frame[FRAME_BITS - 1] = false;
        self
    }

    /// Cycle index (rising edges after reset) at which `received_valid`
    /// asserts: start edge, 1.5 bit periods to the first data sample, then
    /// 8 more bit periods to the stop-bit sample.
    pub fn valid_at_cycle(&self) -> u64 {
        let cpb = u64::from(self.clocks_per_bit);
        self.idle_cycles + cpb + cpb / 2 + u64::from(DATA_BITS) * cpb
    }

    /// Advances the sequential logic by one rising edge.
    fn step(&mut self) {
        let prev_line = self.tx;

        // Transmit side: idle high, shift the frame out, idle high again.
        self.tx = if self.ticks < self.idle_cycles {
            true
        } else {
            let bit = (self.ticks - self.idle_cycles) / u64::from(self.clocks_per_bit);
            usize::try_from(bit)
                .ok()
                .and_then(|i| self.frame.get(i).copied())
                .unwrap_or(true)
        };
        self.ticks += 1;

        // Receive side, per the sampler scheme: detect the start edge, wait
        // 1.5 bit periods, then sample once per bit period.
        let cpb = self.clocks_per_bit;
        match self.rx {
            RxPhase::WaitStart => {
                if prev_line && !self.tx {
                    self.rx = RxPhase::Sampling { count: 0 };
                }
            }
            RxPhase::Sampling { count } => {
                let count = count + 1;
                let first_sample = cpb + cpb / 2;
                if count >= first_sample && (count - first_sample) % cpb == 0 {
                    let index = (count - first_sample) / cpb;
                    if index < DATA_BITS {
                        self.rx_data |= u8::from(self.tx) << index;
                        self.rx = RxPhase::Sampling { count };
                    } else {
                        // Tenth sample lands mid stop bit.
                        self.frame_error = !self.tx;
                        self.received_valid = true;
                        self.rx = RxPhase::Done;
                    }
                } else {
                    self.rx = RxPhase::Sampling { count };
                }
            }
            RxPhase::Done => {}
        }
    }
}

impl Dut for UartTxTb {
    fn name(&self) -> &str {
        "uart_tx_tb"
    }

    fn set_clk(&mut self, level: bool) {
        self.clk = level;
    }

    fn eval(&mut self) {
        let rising = self.clk && !self.prev_clk;
        self.prev_clk = self.clk;
        if rising {
            self.step();
        }
    }

    fn received_valid(&self) -> bool {
        self.received_valid
    }

    fn received_data(&self) -> u8 {
        self.rx_data
    }

    fn frame_error(&self) -> bool {
        self.frame_error
    }

    fn signals(&self) -> SignalFrame {
        SignalFrame {
            clk: self.clk,
            tx: self.tx,
            received_valid: self.received_valid,
            received_data: self.rx_data,
            frame_error: self.frame_error,
        }
    }
}
