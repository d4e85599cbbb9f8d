//! Complete display profile
//!
//! This is the top-level configuration record a board selects. It is
//! fixed at build time and never mutated afterwards.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::controller::{ColorOrder, ControllerKind};
use super::fonts::FontSet;
use super::pins::{PinConflict, PinMap, Signal};
use super::timing::{BusOp, BusTiming};
use super::UnknownName;

/// Level that turns the backlight on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BacklightLevel {
    #[default]
    High,
    Low,
}

impl BacklightLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
        }
    }

    /// Value of the `TFT_BACKLIGHT_ON` define
    pub const fn header_value(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Low => "LOW",
        }
    }

    pub fn from_header_value(value: &str) -> Option<Self> {
        match value {
            "HIGH" | "1" => Some(Self::High),
            "LOW" | "0" => Some(Self::Low),
            _ => None,
        }
    }

    /// Pin level for a requested backlight state
    pub const fn pin_high_for(self, on: bool) -> bool {
        match self {
            Self::High => on,
            Self::Low => !on,
        }
    }
}

impl fmt::Display for BacklightLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BacklightLevel {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" | "HIGH" => Ok(Self::High),
            "low" | "LOW" => Ok(Self::Low),
            _ => Err(UnknownName),
        }
    }
}

/// Profile validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProfileError {
    /// A bus clock is zero
    ZeroClock(BusOp),
    /// Read clock above the write clock
    ReadFasterThanWrite { read_hz: u32, write_hz: u32 },
    /// Pin number out of range for a signal
    InvalidPin(Signal),
    /// Two signals share a GPIO
    DuplicatePin(PinConflict),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroClock(op) => write!(f, "{} clock must be greater than 0 Hz", op),
            Self::ReadFasterThanWrite { read_hz, write_hz } => write!(
                f,
                "read clock {} Hz exceeds write clock {} Hz",
                read_hz, write_hz
            ),
            Self::InvalidPin(signal) => write!(f, "pin for '{}' is out of range", signal),
            Self::DuplicatePin(c) => write!(
                f,
                "'{}' and '{}' are both wired to GPIO{}",
                c.first, c.second, c.gpio
            ),
        }
    }
}

/// Display configuration profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct DisplayProfile {
    /// Setup identifier reported by the driver library
    #[cfg_attr(feature = "serde", serde(default))]
    pub setup_id: u8,
    /// Panel controller
    pub controller: ControllerKind,
    /// Colour order override (`None` = controller default)
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub color_order: Option<ColorOrder>,
    /// Level that turns the backlight on
    #[cfg_attr(feature = "serde", serde(default))]
    pub backlight_on: BacklightLevel,
    /// Fonts to compile in
    #[cfg_attr(feature = "serde", serde(default))]
    pub fonts: FontSet,
    /// Pin wiring
    #[cfg_attr(feature = "serde", serde(default))]
    pub pins: PinMap,
    /// SPI clock rates
    pub bus: BusTiming,
}

impl DisplayProfile {
    /// Profile with no pins, no fonts and the controller's colour order
    pub const fn new(controller: ControllerKind, bus: BusTiming) -> Self {
        Self {
            setup_id: 0,
            controller,
            color_order: None,
            backlight_on: BacklightLevel::High,
            fonts: FontSet::EMPTY,
            pins: PinMap::EMPTY,
            bus,
        }
    }

    pub const fn with_setup_id(mut self, setup_id: u8) -> Self {
        self.setup_id = setup_id;
        self
    }

    pub const fn with_color_order(mut self, order: Option<ColorOrder>) -> Self {
        self.color_order = order;
        self
    }

    pub const fn with_backlight_on(mut self, level: BacklightLevel) -> Self {
        self.backlight_on = level;
        self
    }

    pub const fn with_fonts(mut self, fonts: FontSet) -> Self {
        self.fonts = fonts;
        self
    }

    pub const fn with_pins(mut self, pins: PinMap) -> Self {
        self.pins = pins;
        self
    }

    /// Check the profile invariants
    ///
    /// Returns the first violation found. Usable in `const` items:
    ///
    /// ```
    /// use tftcfg_core::presets::ESP_GAMING_CLOCK_ILI9341;
    ///
    /// const _: () = assert!(ESP_GAMING_CLOCK_ILI9341.profile.validate().is_ok());
    /// ```
    pub const fn validate(&self) -> Result<(), ProfileError> {
        let mut i = 0;
        while i < BusOp::ALL.len() {
            let op = BusOp::ALL[i];
            if self.bus.get(op) == 0 {
                return Err(ProfileError::ZeroClock(op));
            }
            i += 1;
        }

        if self.bus.read_hz > self.bus.write_hz {
            return Err(ProfileError::ReadFasterThanWrite {
                read_hz: self.bus.read_hz,
                write_hz: self.bus.write_hz,
            });
        }

        if let Some(signal) = self.pins.first_invalid() {
            return Err(ProfileError::InvalidPin(signal));
        }

        if let Some(conflict) = self.pins.find_conflict() {
            return Err(ProfileError::DuplicatePin(conflict));
        }

        Ok(())
    }

    /// Whether a touch controller is wired
    pub const fn has_touch(&self) -> bool {
        self.pins.touch_cs.is_some()
    }

    /// Whether the backlight is switchable
    pub const fn has_backlight_control(&self) -> bool {
        self.pins.backlight.is_some()
    }
}
