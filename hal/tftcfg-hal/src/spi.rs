//! SPI bus settings
//!
//! A display bus carries three kinds of traffic at different clocks. Each
//! gets its own [`SpiConfig`], and the chip HAL reprograms the peripheral
//! when the traffic kind changes.

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    #[default]
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}

/// SPI settings for one kind of transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    pub mode: Mode,
}

impl SpiConfig {
    /// Mode 0 at the given clock
    pub const fn new(frequency: u32) -> Self {
        Self {
            frequency,
            mode: Mode::Mode0,
        }
    }

    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn polarity(&self) -> Polarity {
        <(Polarity, Phase)>::from(self.mode).0
    }

    pub fn phase(&self) -> Phase {
        <(Polarity, Phase)>::from(self.mode).1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_decomposition() {
        let cfg = SpiConfig::new(2_500_000);
        assert_eq!(cfg.polarity(), Polarity::IdleLow);
        assert_eq!(cfg.phase(), Phase::CaptureOnFirstTransition);

        let cfg = cfg.with_mode(Mode::Mode3);
        assert_eq!(cfg.polarity(), Polarity::IdleHigh);
        assert_eq!(cfg.phase(), Phase::CaptureOnSecondTransition);
        assert_eq!(cfg.frequency, 2_500_000);
    }
}
