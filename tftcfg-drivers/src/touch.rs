//! Touch pen interrupt
//!
//! XPT2046-class controllers pull PENIRQ low while the screen is pressed.
//! Polling the pin avoids clocking the touch controller when idle.

use tftcfg_hal::InputPin;

/// Touch controller interrupt line
pub struct TouchIrq<P> {
    pin: P,
}

impl<P: InputPin> TouchIrq<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Screen is being pressed (PENIRQ is low)
    pub fn is_pressed(&self) -> bool {
        self.pin.is_low()
    }

    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPin;

    #[test]
    fn test_active_low_irq() {
        let irq = TouchIrq::new(MockPin::reading(true));
        assert!(!irq.is_pressed());

        let irq = TouchIrq::new(MockPin::reading(false));
        assert!(irq.is_pressed());
    }
}
