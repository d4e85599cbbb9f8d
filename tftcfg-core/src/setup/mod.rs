//! `User_Setup` header codec
//!
//! TFT driver libraries are configured through a header of `#define`s:
//! one `<CONTROLLER>_DRIVER` flag, pin assignments, `LOAD_*` font flags and
//! the SPI clocks. This module renders a [`DisplayProfile`] into that form
//! and reads it back.
//!
//! ```text
//! #define ILI9341_DRIVER
//! #define TFT_CS              PIN_D8  // Chip select control
//! #define LOAD_FONT2
//! #define SPI_FREQUENCY       40000000
//! ```
//!
//! [`DisplayProfile`]: crate::config::DisplayProfile

mod parser;
mod writer;

pub use parser::{parse_setup, SetupError};
pub use writer::write_setup;

/// Define carrying the setup identifier
pub const SETUP_ID_DEFINE: &str = "USER_SETUP_ID";

/// Define carrying the colour order override
pub const COLOR_ORDER_DEFINE: &str = "TFT_RGB_ORDER";

/// Define carrying the backlight active level
pub const BACKLIGHT_ON_DEFINE: &str = "TFT_BACKLIGHT_ON";

/// Pin value meaning "not connected"
pub const UNCONNECTED_PIN: &str = "-1";

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::config::*;
    use crate::presets;
    use proptest::prelude::*;
    use std::string::String;

    fn render(profile: &DisplayProfile) -> String {
        let mut out = String::new();
        write_setup(profile, &mut out).unwrap();
        out
    }

    #[test]
    fn test_presets_round_trip() {
        for preset in presets::ALL {
            let text = render(&preset.profile);
            assert_eq!(parse_setup(&text), Ok(preset.profile), "{}", preset.name);
        }
    }

    #[test]
    fn test_parse_original_gaming_clock_header() {
        let header = r#"#define USER_SETUP_ID 1

#define ILI9341_DRIVER  // Use the ILI9341 screen module
//#define TFT_RGB_ORDER TFT_RGB  // Colour order Red-Green-Blue
//#define TFT_RGB_ORDER TFT_BGR  // Colour order Blue-Green-Red

#define TFT_CS              PIN_D8  // Chip select control
#define TFT_DC              PIN_D3  // Data Command control pin
#define TFT_RST             PIN_D0  // Reset pin

#define TFT_BL              PIN_D1  // LED back-light control pin
#define TFT_BACKLIGHT_ON    HIGH    // Level to turn ON back-light (HIGH or LOW)

#define TOUCH_CS            PIN_D2  // Chip select pin (T_CS) of touch screen
#define TOUCH_IRQ           PIN_D4  // Touch IRQ

//#define LOAD_GLCD   // Font 1. Original Adafruit 8 pixel font needs ~1820 bytes in FLASH
#define LOAD_FONT2  // Font 2. Small 16 pixel high font, needs ~3534 bytes in FLASH, 96 characters
#define LOAD_FONT4  // Font 4. Medium 26 pixel high font, needs ~5848 bytes in FLASH, 96 characters
#define LOAD_FONT6  // Font 6. Large 48 pixel font, needs ~2666 bytes in FLASH, only characters 1234567890:-.apm
#define LOAD_FONT7  // Font 7. 7 segment 48 pixel font, needs ~2438 bytes in FLASH, only characters 1234567890:.
#define LOAD_FONT8  // Font 8. Large 75 pixel font needs ~3256 bytes in FLASH, only characters 1234567890:-.
//#define LOAD_GFXFF  // FreeFonts. Include access to the 48 Adafruit_GFX free fonts FF1 to FF48 and custom fonts

#define SPI_FREQUENCY  40000000
#define SPI_READ_FREQUENCY  20000000
#define SPI_TOUCH_FREQUENCY  2500000
"#;

        let profile = parse_setup(header).unwrap();
        assert_eq!(profile, presets::ESP_GAMING_CLOCK_ILI9341.profile);
    }

    fn any_pin() -> impl Strategy<Value = Option<PinId>> {
        prop_oneof![
            Just(None),
            (0..=MAX_GPIO).prop_map(|n| Some(PinId::Gpio(n))),
            (0..=MAX_BOARD_LABEL).prop_map(|n| Some(PinId::D(n))),
        ]
    }

    fn any_profile() -> impl Strategy<Value = DisplayProfile> {
        (
            any::<u8>(),
            proptest::sample::select(ControllerKind::ALL.to_vec()),
            prop_oneof![Just(None), Just(Some(ColorOrder::Rgb)), Just(Some(ColorOrder::Bgr))],
            prop_oneof![Just(BacklightLevel::High), Just(BacklightLevel::Low)],
            proptest::collection::vec(proptest::sample::select(Font::ALL.to_vec()), 0..7),
            proptest::array::uniform9(any_pin()),
            (1u32..=80_000_000, 1u32..=80_000_000, 1u32..=10_000_000),
        )
            .prop_map(|(id, controller, order, level, fonts, slots, (a, b, touch))| {
                let mut pins = PinMap::EMPTY;
                for (signal, pin) in Signal::ALL.iter().zip(slots) {
                    pins.set(*signal, pin);
                }
                DisplayProfile::new(controller, BusTiming::new(a.max(b), a.min(b), touch))
                    .with_setup_id(id)
                    .with_color_order(order)
                    .with_backlight_on(level)
                    .with_fonts(fonts.into_iter().collect())
                    .with_pins(pins)
            })
            .prop_filter("pins must not collide", |p| p.pins.find_conflict().is_none())
    }

    proptest! {
        #[test]
        fn prop_header_round_trip(profile in any_profile()) {
            prop_assert!(profile.validate().is_ok());
            let text = render(&profile);
            prop_assert_eq!(parse_setup(&text), Ok(profile));
        }
    }
}
