//! ESP8266 gaming clock display setup
//!
//! The profile comes from `display.toml`, checked and converted by the
//! build script. Firmware takes its panel wiring, fonts and SPI clocks
//! from [`PROFILE`].

#![no_std]
#![deny(unsafe_code)]

use tftcfg_core::{DisplayProfile, Font};
use tftcfg_drivers::backlight::Backlight;
use tftcfg_drivers::bus::ClockPlan;
use tftcfg_drivers::touch::TouchIrq;
use tftcfg_hal::gpio::{InputPin, OutputPin};

/// Display profile for this board
pub const PROFILE: DisplayProfile = include!(concat!(env!("OUT_DIR"), "/display_profile.rs"));

const _: () = assert!(PROFILE.validate().is_ok());
const _: () = assert!(PROFILE.has_touch());

/// Path of the generated `User_Setup.h`
pub const USER_SETUP_HEADER: &str = env!("TFTCFG_USER_SETUP");

/// SPI clocks for panel and touch transactions
pub const CLOCKS: ClockPlan = ClockPlan::for_profile(&PROFILE);

/// Font for the large time digits (`12:45`)
pub fn time_font() -> Option<Font> {
    PROFILE.fonts.tallest_covering("0123456789:")
}

/// Font for labels and menu text
pub fn label_font() -> Option<Font> {
    PROFILE.fonts.smallest_covering("Aa")
}

/// Backlight driver for this board's wiring
pub fn backlight<P: OutputPin>(pin: P) -> Backlight<P> {
    Backlight::for_profile(pin, &PROFILE)
}

/// Touch pen-IRQ input for this board's wiring
pub fn touch_irq<P: InputPin>(pin: P) -> TouchIrq<P> {
    TouchIrq::new(pin)
}
