//! Named display presets
//!
//! A board picks one preset and adjusts it, instead of editing a profile
//! from scratch. Variants that differ only in colour order are kept side by
//! side since panels of the same model ship wired both ways.

use crate::config::{
    BacklightLevel, BusTiming, ColorOrder, ControllerKind, DisplayProfile, Font, FontSet, PinId,
    PinMap, Signal,
};

/// A named profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Preset {
    /// Lookup name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    pub profile: DisplayProfile,
}

/// Fonts used by the gaming clock faces
const GAMING_CLOCK_FONTS: FontSet = FontSet::of(&[
    Font::Font2,
    Font::Font4,
    Font::Font6,
    Font::Font7,
    Font::Font8,
]);

/// ILI9341 + XPT2046 touch on a NodeMCU (hardware SPI on D5-D7)
const GAMING_CLOCK_PINS: PinMap = PinMap::EMPTY
    .with(Signal::Cs, Some(PinId::D(8)))
    .with(Signal::Dc, Some(PinId::D(3)))
    .with(Signal::Rst, Some(PinId::D(0)))
    .with(Signal::Backlight, Some(PinId::D(1)))
    .with(Signal::TouchCs, Some(PinId::D(2)))
    .with(Signal::TouchIrq, Some(PinId::D(4)));

const GAMING_CLOCK: DisplayProfile = DisplayProfile::new(
    ControllerKind::Ili9341,
    BusTiming::new(40_000_000, 20_000_000, 2_500_000),
)
.with_setup_id(1)
.with_backlight_on(BacklightLevel::High)
.with_fonts(GAMING_CLOCK_FONTS)
.with_pins(GAMING_CLOCK_PINS);

/// ESP gaming clock, controller default colour order
pub const ESP_GAMING_CLOCK_ILI9341: Preset = Preset {
    name: "esp_gaming_clock_ili9341",
    description: "ESP8266 gaming clock, ILI9341 with touch",
    profile: GAMING_CLOCK,
};

/// ESP gaming clock on a panel needing red-green-blue order
pub const ESP_GAMING_CLOCK_ILI9341_RGB: Preset = Preset {
    name: "esp_gaming_clock_ili9341_rgb",
    description: "ESP8266 gaming clock, ILI9341 with touch, RGB colour order",
    profile: GAMING_CLOCK.with_color_order(Some(ColorOrder::Rgb)),
};

/// ESP gaming clock on a panel needing blue-green-red order
pub const ESP_GAMING_CLOCK_ILI9341_BGR: Preset = Preset {
    name: "esp_gaming_clock_ili9341_bgr",
    description: "ESP8266 gaming clock, ILI9341 with touch, BGR colour order",
    profile: GAMING_CLOCK.with_color_order(Some(ColorOrder::Bgr)),
};

/// All presets
pub const ALL: &[Preset] = &[
    ESP_GAMING_CLOCK_ILI9341,
    ESP_GAMING_CLOCK_ILI9341_RGB,
    ESP_GAMING_CLOCK_ILI9341_BGR,
];

// Presets are checked when this crate compiles
const _: () = {
    let mut i = 0;
    while i < ALL.len() {
        assert!(ALL[i].profile.validate().is_ok());
        i += 1;
    }
};

/// Find a preset by name
pub fn find(name: &str) -> Option<&'static Preset> {
    ALL.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_preset() {
        let preset = find("esp_gaming_clock_ili9341").unwrap();
        assert_eq!(preset.profile.controller, ControllerKind::Ili9341);
        assert_eq!(preset.profile.color_order, None);
        assert!(find("esp_gaming_clock").is_none());
    }

    #[test]
    fn test_gaming_clock_values() {
        let p = ESP_GAMING_CLOCK_ILI9341.profile;
        assert_eq!(p.setup_id, 1);
        assert_eq!(p.pins.get(Signal::Cs), Some(PinId::D(8)));
        assert_eq!(p.pins.get(Signal::Dc), Some(PinId::D(3)));
        assert_eq!(p.pins.get(Signal::Rst), Some(PinId::D(0)));
        assert_eq!(p.pins.get(Signal::Backlight), Some(PinId::D(1)));
        assert_eq!(p.pins.get(Signal::TouchCs), Some(PinId::D(2)));
        assert_eq!(p.pins.get(Signal::TouchIrq), Some(PinId::D(4)));
        assert_eq!(p.pins.get(Signal::Mosi), None);
        assert_eq!(p.backlight_on, BacklightLevel::High);
        assert_eq!(p.fonts.len(), 5);
        assert!(!p.fonts.contains(Font::Glcd));
        assert_eq!(p.bus, BusTiming::new(40_000_000, 20_000_000, 2_500_000));
    }

    #[test]
    fn test_variants_differ_only_in_colour_order() {
        let base = ESP_GAMING_CLOCK_ILI9341.profile;
        for preset in [ESP_GAMING_CLOCK_ILI9341_RGB, ESP_GAMING_CLOCK_ILI9341_BGR] {
            assert!(preset.profile.color_order.is_some());
            assert_eq!(preset.profile.with_color_order(None), base);
        }
    }

    #[test]
    fn test_preset_names_unique() {
        for (i, a) in ALL.iter().enumerate() {
            assert!(ALL[i + 1..].iter().all(|b| b.name != a.name));
        }
    }
}
