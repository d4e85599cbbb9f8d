//! SPI bus timing
//!
//! Writes, reads and touch polling each get their own clock. Panel reads
//! tolerate less speed than writes, and resistive touch controllers are
//! slower still.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of SPI transaction a clock applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusOp {
    /// Pixel and command writes to the panel
    Write,
    /// Reads back from the panel (pixel/ID reads)
    Read,
    /// Touch controller sampling
    Touch,
}

impl BusOp {
    pub const ALL: [BusOp; 3] = [Self::Write, Self::Read, Self::Touch];

    /// Header define holding this clock
    pub const fn define(self) -> &'static str {
        match self {
            Self::Write => "SPI_FREQUENCY",
            Self::Read => "SPI_READ_FREQUENCY",
            Self::Touch => "SPI_TOUCH_FREQUENCY",
        }
    }

    pub fn from_define(define: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.define() == define)
    }
}

impl fmt::Display for BusOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write => f.write_str("write"),
            Self::Read => f.write_str("read"),
            Self::Touch => f.write_str("touch"),
        }
    }
}

/// SPI clock rates in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct BusTiming {
    /// Write clock
    pub write_hz: u32,
    /// Read clock, at most `write_hz`
    pub read_hz: u32,
    /// Touch controller clock
    pub touch_hz: u32,
}

impl BusTiming {
    pub const fn new(write_hz: u32, read_hz: u32, touch_hz: u32) -> Self {
        Self {
            write_hz,
            read_hz,
            touch_hz,
        }
    }

    pub const fn get(&self, op: BusOp) -> u32 {
        match op {
            BusOp::Write => self.write_hz,
            BusOp::Read => self.read_hz,
            BusOp::Touch => self.touch_hz,
        }
    }

    pub fn set(&mut self, op: BusOp, hz: u32) {
        match op {
            BusOp::Write => self.write_hz = hz,
            BusOp::Read => self.read_hz = hz,
            BusOp::Touch => self.touch_hz = hz,
        }
    }
}

impl Default for BusTiming {
    /// 40 MHz writes, 20 MHz reads, 2.5 MHz touch
    fn default() -> Self {
        Self::new(40_000_000, 20_000_000, 2_500_000)
    }
}
