//! Header parsing
//!
//! Handles the subset of the preprocessor that setup headers use:
//!
//! - `#define NAME` flags and `#define NAME VALUE` pairs
//! - Trailing `// ...` comments
//! - Disabled `//#define ...` lines and other comment lines (skipped)
//!
//! Any other directive (`#if`, `#include`, ...) and unknown defines are
//! ignored, since the driver library accepts many options this profile
//! does not model.

use core::fmt;

use super::{BACKLIGHT_ON_DEFINE, COLOR_ORDER_DEFINE, SETUP_ID_DEFINE, UNCONNECTED_PIN};
use crate::config::{
    BacklightLevel, BusOp, BusTiming, ColorOrder, ControllerKind, DisplayProfile, Font, FontSet,
    PinId, PinMap, PinParseError, ProfileError, Signal,
};

/// Header parse error
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupError {
    /// Define value could not be parsed
    InvalidValue { line: usize },
    /// Pin define value is not a pin
    InvalidPin { line: usize, error: PinParseError },
    /// A second `*_DRIVER` flag
    MultipleControllers { line: usize },
    /// A second `TFT_RGB_ORDER`
    ConflictingColorOrder { line: usize },
    /// Same pin, clock, id or level defined twice
    Redefined { line: usize },
    /// No `*_DRIVER` flag at all
    MissingController,
    /// A required SPI clock is missing
    MissingFrequency(BusOp),
    /// Parsed profile failed validation
    Profile(ProfileError),
}

impl From<ProfileError> for SetupError {
    fn from(e: ProfileError) -> Self {
        SetupError::Profile(e)
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { line } => write!(f, "line {}: invalid value", line),
            Self::InvalidPin { line, error } => write!(f, "line {}: {}", line, error),
            Self::MultipleControllers { line } => {
                write!(f, "line {}: more than one display driver selected", line)
            }
            Self::ConflictingColorOrder { line } => {
                write!(f, "line {}: colour order set more than once", line)
            }
            Self::Redefined { line } => write!(f, "line {}: define repeated", line),
            Self::MissingController => f.write_str("no display driver selected"),
            Self::MissingFrequency(op) => write!(f, "missing {}", op.define()),
            Self::Profile(e) => write!(f, "invalid profile: {}", e),
        }
    }
}

/// Values collected while scanning the header
#[derive(Default)]
struct Collected {
    setup_id: Option<u8>,
    controller: Option<ControllerKind>,
    color_order: Option<ColorOrder>,
    backlight_on: Option<BacklightLevel>,
    fonts: FontSet,
    pins: PinMap,
    /// Pins seen, including ones explicitly set to -1
    seen_pins: [bool; crate::config::SIGNAL_COUNT],
    clocks: [Option<u32>; 3],
}

/// Parse a `User_Setup` header into a validated profile
pub fn parse_setup(input: &str) -> Result<DisplayProfile, SetupError> {
    let mut c = Collected::default();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        if let Some((name, value)) = parse_define(line) {
            apply_define(&mut c, line_no, name, value)?;
        }
    }

    let controller = c.controller.ok_or(SetupError::MissingController)?;

    let mut bus = BusTiming::new(0, 0, 0);
    for (op, hz) in BusOp::ALL.iter().zip(c.clocks) {
        bus.set(*op, hz.ok_or(SetupError::MissingFrequency(*op))?);
    }

    let profile = DisplayProfile::new(controller, bus)
        .with_setup_id(c.setup_id.unwrap_or(0))
        .with_color_order(c.color_order)
        .with_backlight_on(c.backlight_on.unwrap_or_default())
        .with_fonts(c.fonts)
        .with_pins(c.pins);

    profile.validate()?;
    Ok(profile)
}

/// Split an active `#define NAME [VALUE]` line
///
/// Returns `None` for blank, comment and non-define lines.
fn parse_define(line: &str) -> Option<(&str, Option<&str>)> {
    let line = line.trim();

    // Remove trailing comments
    let line = match line.find("//") {
        Some(pos) => line[..pos].trim(),
        None => line,
    };

    let rest = line.strip_prefix('#')?.trim_start();
    let rest = rest.strip_prefix("define")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut parts = rest.split_whitespace();
    let name = parts.next()?;
    let value = parts.next();
    Some((name, value))
}

fn apply_define(
    c: &mut Collected,
    line: usize,
    name: &str,
    value: Option<&str>,
) -> Result<(), SetupError> {
    if let Some(controller) = ControllerKind::from_flag(name) {
        if c.controller.is_some() {
            return Err(SetupError::MultipleControllers { line });
        }
        c.controller = Some(controller);
        return Ok(());
    }

    if let Some(font) = Font::from_flag(name) {
        c.fonts.insert(font);
        return Ok(());
    }

    if let Some(signal) = Signal::from_define(name) {
        let slot = &mut c.seen_pins[signal_index(signal)];
        if *slot {
            return Err(SetupError::Redefined { line });
        }
        *slot = true;

        let value = value.ok_or(SetupError::InvalidValue { line })?;
        let pin = if value == UNCONNECTED_PIN {
            None
        } else {
            Some(
                value
                    .parse::<PinId>()
                    .map_err(|error| SetupError::InvalidPin { line, error })?,
            )
        };
        c.pins.set(signal, pin);
        return Ok(());
    }

    if let Some(op) = BusOp::from_define(name) {
        let slot = &mut c.clocks[op as usize];
        if slot.is_some() {
            return Err(SetupError::Redefined { line });
        }
        *slot = Some(parse_number(value, line)?);
        return Ok(());
    }

    match name {
        SETUP_ID_DEFINE => {
            if c.setup_id.is_some() {
                return Err(SetupError::Redefined { line });
            }
            c.setup_id = Some(parse_number(value, line)?);
        }
        COLOR_ORDER_DEFINE => {
            if c.color_order.is_some() {
                return Err(SetupError::ConflictingColorOrder { line });
            }
            let value = value.ok_or(SetupError::InvalidValue { line })?;
            c.color_order =
                Some(ColorOrder::from_header_value(value).ok_or(SetupError::InvalidValue { line })?);
        }
        BACKLIGHT_ON_DEFINE => {
            if c.backlight_on.is_some() {
                return Err(SetupError::Redefined { line });
            }
            let value = value.ok_or(SetupError::InvalidValue { line })?;
            c.backlight_on = Some(
                BacklightLevel::from_header_value(value).ok_or(SetupError::InvalidValue { line })?,
            );
        }
        _ => {} // Ignore unknown defines
    }

    Ok(())
}

fn parse_number<T: core::str::FromStr>(value: Option<&str>, line: usize) -> Result<T, SetupError> {
    value
        .and_then(|v| v.parse().ok())
        .ok_or(SetupError::InvalidValue { line })
}

fn signal_index(signal: Signal) -> usize {
    Signal::ALL
        .iter()
        .position(|s| *s == signal)
        .unwrap_or_default()
}
