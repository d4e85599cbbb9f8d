//! SPI clock plan
//!
//! Turns the profile's three bus clocks into SPI settings per transaction
//! kind. Panel and XPT2046 touch controllers both use SPI mode 0.

use tftcfg_core::{BusOp, BusTiming, DisplayProfile};
use tftcfg_hal::SpiConfig;

/// SPI settings for writes, reads and touch polling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockPlan {
    write: SpiConfig,
    read: SpiConfig,
    touch: SpiConfig,
}

impl ClockPlan {
    pub const fn new(timing: &BusTiming) -> Self {
        Self {
            write: SpiConfig::new(timing.write_hz),
            read: SpiConfig::new(timing.read_hz),
            touch: SpiConfig::new(timing.touch_hz),
        }
    }

    pub const fn for_profile(profile: &DisplayProfile) -> Self {
        Self::new(&profile.bus)
    }

    /// Settings for a transaction kind
    pub const fn config_for(&self, op: BusOp) -> SpiConfig {
        match op {
            BusOp::Write => self.write,
            BusOp::Read => self.read,
            BusOp::Touch => self.touch,
        }
    }

    /// Whether the peripheral must be reprogrammed between two transactions
    pub fn needs_reconfigure(&self, from: BusOp, to: BusOp) -> bool {
        self.config_for(from) != self.config_for(to)
    }

    /// Slowest configured clock
    pub fn min_frequency(&self) -> u32 {
        BusOp::ALL
            .iter()
            .map(|op| self.config_for(*op).frequency)
            .min()
            .unwrap_or(0)
    }
}

impl From<&BusTiming> for ClockPlan {
    fn from(timing: &BusTiming) -> Self {
        Self::new(timing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tftcfg_core::presets::ESP_GAMING_CLOCK_ILI9341;
    use tftcfg_hal::Mode;

    #[test]
    fn test_gaming_clock_plan() {
        let plan = ClockPlan::for_profile(&ESP_GAMING_CLOCK_ILI9341.profile);
        assert_eq!(plan.config_for(BusOp::Write).frequency, 40_000_000);
        assert_eq!(plan.config_for(BusOp::Read).frequency, 20_000_000);
        assert_eq!(plan.config_for(BusOp::Touch).frequency, 2_500_000);
        assert_eq!(plan.config_for(BusOp::Touch).mode, Mode::Mode0);
        assert_eq!(plan.min_frequency(), 2_500_000);
    }

    #[test]
    fn test_reconfigure_only_on_clock_change() {
        let plan = ClockPlan::from(&BusTiming::new(20_000_000, 20_000_000, 2_500_000));
        assert!(!plan.needs_reconfigure(BusOp::Write, BusOp::Read));
        assert!(plan.needs_reconfigure(BusOp::Read, BusOp::Touch));
        assert!(!plan.needs_reconfigure(BusOp::Touch, BusOp::Touch));
    }
}
