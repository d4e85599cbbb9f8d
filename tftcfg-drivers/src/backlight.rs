//! Backlight control
//!
//! Drives the backlight enable pin. Panels differ in whether the pin is
//! active-high (direct drive, NPN transistor) or active-low (PNP/P-FET).

use tftcfg_core::{BacklightLevel, DisplayProfile};
use tftcfg_hal::OutputPin;

/// Backlight on a GPIO pin
pub struct Backlight<P> {
    pin: P,
    level: BacklightLevel,
    /// Current logical state (true = lit)
    on: bool,
}

impl<P: OutputPin> Backlight<P> {
    /// Create a backlight driver, initially off
    pub fn new(pin: P, level: BacklightLevel) -> Self {
        let mut backlight = Self {
            pin,
            level,
            on: false,
        };
        backlight.set(false);
        backlight
    }

    /// Create a backlight driver using the profile's active level
    pub fn for_profile(pin: P, profile: &DisplayProfile) -> Self {
        Self::new(pin, profile.backlight_on)
    }

    pub fn set(&mut self, on: bool) {
        self.on = on;
        self.pin.set_state(self.level.pin_high_for(on));
    }

    pub fn on(&mut self) {
        self.set(true);
    }

    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn toggle(&mut self) {
        self.set(!self.on);
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn level(&self) -> BacklightLevel {
        self.level
    }

    /// Release the pin
    pub fn release(self) -> P {
        self.pin
    }
}
