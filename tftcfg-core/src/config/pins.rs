//! Pin wiring
//!
//! Maps each logical display/touch signal to at most one physical pin.
//! Pins are given either as a raw GPIO number or as a NodeMCU board label
//! (`D0`..`D10`), which resolves to a GPIO number for conflict checks.

use core::fmt;
use core::str::FromStr;

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest GPIO number accepted (ESP32-S3 has GPIO0-48)
pub const MAX_GPIO: u8 = 48;

/// Highest NodeMCU board label (`D10`)
pub const MAX_BOARD_LABEL: u8 = 10;

/// Number of logical signals in a [`PinMap`]
pub const SIGNAL_COUNT: usize = 9;

/// NodeMCU `Dn` label to ESP8266 GPIO number
const NODEMCU_GPIO: [u8; MAX_BOARD_LABEL as usize + 1] = [16, 5, 4, 0, 2, 14, 12, 13, 15, 3, 1];

/// Pin string parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinParseError {
    /// Not a recognizable pin form
    Malformed,
    /// `Dn` label outside D0-D10
    UnknownBoardLabel,
    /// GPIO number above [`MAX_GPIO`]
    GpioOutOfRange,
}

impl fmt::Display for PinParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => f.write_str("malformed pin, expected e.g. \"D8\" or \"gpio15\""),
            Self::UnknownBoardLabel => f.write_str("board label must be D0-D10"),
            Self::GpioOutOfRange => write!(f, "GPIO number must be 0-{}", MAX_GPIO),
        }
    }
}

/// A physical pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinId {
    /// Raw GPIO number
    Gpio(u8),
    /// NodeMCU board label `Dn`
    D(u8),
}

impl PinId {
    /// Resolve to the GPIO number
    ///
    /// Out-of-range board labels (only constructible directly, never by
    /// parsing) resolve to `u8::MAX`.
    pub const fn gpio(self) -> u8 {
        match self {
            Self::Gpio(n) => n,
            Self::D(n) => {
                if n <= MAX_BOARD_LABEL {
                    NODEMCU_GPIO[n as usize]
                } else {
                    u8::MAX
                }
            }
        }
    }

    /// Check the pin number is within the accepted range
    pub const fn is_valid(self) -> bool {
        match self {
            Self::Gpio(n) => n <= MAX_GPIO,
            Self::D(n) => n <= MAX_BOARD_LABEL,
        }
    }

    /// Form used in `User_Setup` headers (`PIN_D8`, `15`)
    pub fn header_value(self) -> HeaderPin {
        HeaderPin(self)
    }
}

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(n) => write!(f, "gpio{}", n),
            Self::D(n) => write!(f, "D{}", n),
        }
    }
}

impl FromStr for PinId {
    type Err = PinParseError;

    /// Accepts `D8`, `PIN_D8`, `gpio15`, `GPIO15` and bare `15`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let label = s.strip_prefix("PIN_").unwrap_or(s);

        if let Some(n) = label.strip_prefix('D').or_else(|| label.strip_prefix('d')) {
            let n: u8 = parse_number(n)?;
            if n > MAX_BOARD_LABEL {
                return Err(PinParseError::UnknownBoardLabel);
            }
            return Ok(Self::D(n));
        }

        let n = s
            .strip_prefix("gpio")
            .or_else(|| s.strip_prefix("GPIO"))
            .unwrap_or(s);
        let n: u8 = parse_number(n)?;
        if n > MAX_GPIO {
            return Err(PinParseError::GpioOutOfRange);
        }
        Ok(Self::Gpio(n))
    }
}

fn parse_number(s: &str) -> Result<u8, PinParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PinParseError::Malformed);
    }
    // All digits but too large for u8
    s.parse().map_err(|_| PinParseError::GpioOutOfRange)
}

/// Header rendering of a [`PinId`]
pub struct HeaderPin(PinId);

impl fmt::Display for HeaderPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            PinId::Gpio(n) => write!(f, "{}", n),
            PinId::D(n) => write!(f, "PIN_D{}", n),
        }
    }
}

/// Logical signal a pin can be assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    /// Panel chip select
    Cs,
    /// Data/command select
    Dc,
    /// Panel reset
    Rst,
    /// Backlight enable
    Backlight,
    /// Touch controller chip select
    TouchCs,
    /// Touch controller pen interrupt
    TouchIrq,
    /// SPI data out (only for boards without fixed SPI pins)
    Mosi,
    /// SPI data in
    Miso,
    /// SPI clock
    Sclk,
}

impl Signal {
    /// All signals, in header order
    pub const ALL: [Signal; SIGNAL_COUNT] = [
        Self::Mosi,
        Self::Miso,
        Self::Sclk,
        Self::Cs,
        Self::Dc,
        Self::Rst,
        Self::Backlight,
        Self::TouchCs,
        Self::TouchIrq,
    ];

    /// Header define name
    pub const fn define(self) -> &'static str {
        match self {
            Self::Cs => "TFT_CS",
            Self::Dc => "TFT_DC",
            Self::Rst => "TFT_RST",
            Self::Backlight => "TFT_BL",
            Self::TouchCs => "TOUCH_CS",
            Self::TouchIrq => "TOUCH_IRQ",
            Self::Mosi => "TFT_MOSI",
            Self::Miso => "TFT_MISO",
            Self::Sclk => "TFT_SCLK",
        }
    }

    /// Key in profile files
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cs => "cs",
            Self::Dc => "dc",
            Self::Rst => "rst",
            Self::Backlight => "backlight",
            Self::TouchCs => "touch_cs",
            Self::TouchIrq => "touch_irq",
            Self::Mosi => "mosi",
            Self::Miso => "miso",
            Self::Sclk => "sclk",
        }
    }

    /// One-line description for generated headers
    pub const fn description(self) -> &'static str {
        match self {
            Self::Cs => "Chip select control",
            Self::Dc => "Data Command control pin",
            Self::Rst => "Reset pin",
            Self::Backlight => "LED back-light control pin",
            Self::TouchCs => "Chip select pin (T_CS) of touch screen",
            Self::TouchIrq => "Touch IRQ",
            Self::Mosi => "SPI data out",
            Self::Miso => "SPI data in",
            Self::Sclk => "SPI clock",
        }
    }

    pub fn from_define(define: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.define() == define)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two signals wired to the same GPIO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConflict {
    pub first: Signal,
    pub second: Signal,
    /// Resolved GPIO number both signals use
    pub gpio: u8,
}

/// Signal to pin mapping
///
/// Unmapped signals are `None`; not every board wires reset or backlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PinMap {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub mosi: Option<PinId>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub miso: Option<PinId>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub sclk: Option<PinId>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub cs: Option<PinId>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub dc: Option<PinId>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rst: Option<PinId>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub backlight: Option<PinId>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub touch_cs: Option<PinId>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub touch_irq: Option<PinId>,
}

impl PinMap {
    /// Map with every signal unassigned
    pub const EMPTY: Self = Self {
        mosi: None,
        miso: None,
        sclk: None,
        cs: None,
        dc: None,
        rst: None,
        backlight: None,
        touch_cs: None,
        touch_irq: None,
    };

    /// Pin assigned to a signal
    pub const fn get(&self, signal: Signal) -> Option<PinId> {
        match signal {
            Signal::Cs => self.cs,
            Signal::Dc => self.dc,
            Signal::Rst => self.rst,
            Signal::Backlight => self.backlight,
            Signal::TouchCs => self.touch_cs,
            Signal::TouchIrq => self.touch_irq,
            Signal::Mosi => self.mosi,
            Signal::Miso => self.miso,
            Signal::Sclk => self.sclk,
        }
    }

    /// Assign (or clear, with `None`) a signal's pin
    pub fn set(&mut self, signal: Signal, pin: Option<PinId>) {
        *self = self.with(signal, pin);
    }

    /// Copy of this map with one signal reassigned
    pub const fn with(mut self, signal: Signal, pin: Option<PinId>) -> Self {
        match signal {
            Signal::Cs => self.cs = pin,
            Signal::Dc => self.dc = pin,
            Signal::Rst => self.rst = pin,
            Signal::Backlight => self.backlight = pin,
            Signal::TouchCs => self.touch_cs = pin,
            Signal::TouchIrq => self.touch_irq = pin,
            Signal::Mosi => self.mosi = pin,
            Signal::Miso => self.miso = pin,
            Signal::Sclk => self.sclk = pin,
        }
        self
    }

    /// Assigned signals with their pins, in header order
    pub fn assigned(&self) -> Vec<(Signal, PinId), SIGNAL_COUNT> {
        Signal::ALL
            .iter()
            .filter_map(|&s| self.get(s).map(|p| (s, p)))
            .collect()
    }

    /// First signal whose pin number is out of range
    pub const fn first_invalid(&self) -> Option<Signal> {
        let mut i = 0;
        while i < SIGNAL_COUNT {
            let signal = Signal::ALL[i];
            if let Some(pin) = self.get(signal) {
                if !pin.is_valid() {
                    return Some(signal);
                }
            }
            i += 1;
        }
        None
    }

    /// First pair of signals resolving to the same GPIO
    ///
    /// `D3` and `gpio0` are the same pin and do conflict.
    pub const fn find_conflict(&self) -> Option<PinConflict> {
        let mut i = 0;
        while i < SIGNAL_COUNT {
            let first = Signal::ALL[i];
            if let Some(a) = self.get(first) {
                let mut j = i + 1;
                while j < SIGNAL_COUNT {
                    let second = Signal::ALL[j];
                    if let Some(b) = self.get(second) {
                        if a.gpio() == b.gpio() {
                            return Some(PinConflict {
                                first,
                                second,
                                gpio: a.gpio(),
                            });
                        }
                    }
                    j += 1;
                }
            }
            i += 1;
        }
        None
    }
}
