//! Generated sources
//!
//! The Rust output is a single `DisplayProfile` expression that can be
//! `include!`d into a `const` item. Paths are absolute so the file works
//! from any module.

use std::fmt::{self, Write};

use tftcfg_core::{DisplayProfile, PinId, Signal};

const CORE: &str = "::tftcfg_core";

/// Write the profile as a Rust constant expression
pub fn write_profile_expr<W: Write>(profile: &DisplayProfile, out: &mut W) -> fmt::Result {
    writeln!(out, "{}::DisplayProfile {{", CORE)?;
    writeln!(out, "    setup_id: {},", profile.setup_id)?;
    writeln!(
        out,
        "    controller: {}::ControllerKind::{:?},",
        CORE, profile.controller
    )?;

    match profile.color_order {
        Some(order) => writeln!(
            out,
            "    color_order: ::core::option::Option::Some({}::ColorOrder::{:?}),",
            CORE, order
        )?,
        None => writeln!(out, "    color_order: ::core::option::Option::None,")?,
    }

    writeln!(
        out,
        "    backlight_on: {}::BacklightLevel::{:?},",
        CORE, profile.backlight_on
    )?;

    write!(out, "    fonts: {}::FontSet::of(&[", CORE)?;
    for (i, font) in profile.fonts.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{}::Font::{:?}", CORE, font)?;
    }
    writeln!(out, "]),")?;

    writeln!(out, "    pins: {}::PinMap {{", CORE)?;
    for signal in Signal::ALL {
        write!(out, "        {}: ", signal.as_str())?;
        write_pin(profile.pins.get(signal), out)?;
        writeln!(out, ",")?;
    }
    writeln!(out, "    }},")?;

    writeln!(out, "    bus: {}::BusTiming {{", CORE)?;
    writeln!(out, "        write_hz: {},", profile.bus.write_hz)?;
    writeln!(out, "        read_hz: {},", profile.bus.read_hz)?;
    writeln!(out, "        touch_hz: {},", profile.bus.touch_hz)?;
    writeln!(out, "    }},")?;
    writeln!(out, "}}")
}

fn write_pin<W: Write>(pin: Option<PinId>, out: &mut W) -> fmt::Result {
    match pin {
        Some(pin) => write!(out, "::core::option::Option::Some({}::PinId::{:?})", CORE, pin),
        None => out.write_str("::core::option::Option::None"),
    }
}

/// Rust source for `display_profile.rs`
pub fn profile_source(profile: &DisplayProfile) -> String {
    let mut out = String::from("// Generated by tftcfg-build. Do not edit.\n");
    // Writing into a String cannot fail
    let _ = write_profile_expr(profile, &mut out);
    out
}

/// Header source for `User_Setup.h`
pub fn header_source(profile: &DisplayProfile) -> String {
    let mut out = String::from("// Generated by tftcfg-build. Do not edit.\n\n");
    let _ = tftcfg_core::write_setup(profile, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tftcfg_core::presets::{ESP_GAMING_CLOCK_ILI9341, ESP_GAMING_CLOCK_ILI9341_RGB};
    use tftcfg_core::{parse_setup, BusTiming, ControllerKind};

    #[test]
    fn test_gaming_clock_expr() {
        let src = profile_source(&ESP_GAMING_CLOCK_ILI9341.profile);

        assert!(src.contains("setup_id: 1,"));
        assert!(src.contains("controller: ::tftcfg_core::ControllerKind::Ili9341,"));
        assert!(src.contains("color_order: ::core::option::Option::None,"));
        assert!(src.contains("backlight_on: ::tftcfg_core::BacklightLevel::High,"));
        assert!(src.contains(
            "fonts: ::tftcfg_core::FontSet::of(&[::tftcfg_core::Font::Font2, \
             ::tftcfg_core::Font::Font4, ::tftcfg_core::Font::Font6, \
             ::tftcfg_core::Font::Font7, ::tftcfg_core::Font::Font8]),"
        ));
        assert!(src.contains("cs: ::core::option::Option::Some(::tftcfg_core::PinId::D(8)),"));
        assert!(src.contains("mosi: ::core::option::Option::None,"));
        assert!(src.contains("write_hz: 40000000,"));
        assert!(src.trim_end().ends_with('}'));
    }

    #[test]
    fn test_color_order_and_gpio_expr() {
        let mut profile = ESP_GAMING_CLOCK_ILI9341_RGB.profile;
        profile.pins.sclk = Some(PinId::Gpio(18));

        let src = profile_source(&profile);
        assert!(src.contains(
            "color_order: ::core::option::Option::Some(::tftcfg_core::ColorOrder::Rgb),"
        ));
        assert!(src.contains("sclk: ::core::option::Option::Some(::tftcfg_core::PinId::Gpio(18)),"));
    }

    #[test]
    fn test_every_field_emitted_once() {
        let src = profile_source(&DisplayProfile::new(
            ControllerKind::Gc9a01,
            BusTiming::default(),
        ));
        for signal in Signal::ALL {
            let key = format!("        {}: ", signal.as_str());
            assert_eq!(src.matches(&key).count(), 1, "{}", signal);
        }
        assert!(src.contains("FontSet::of(&[]),"));
    }

    #[test]
    fn test_header_source_parses_back() {
        let header = header_source(&ESP_GAMING_CLOCK_ILI9341.profile);
        assert!(header.starts_with("// Generated"));
        assert_eq!(parse_setup(&header).unwrap(), ESP_GAMING_CLOCK_ILI9341.profile);
    }
}
