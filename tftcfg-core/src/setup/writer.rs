//! Header rendering

use core::fmt::{self, Write};

use heapless::String;

use super::{BACKLIGHT_ON_DEFINE, COLOR_ORDER_DEFINE, SETUP_ID_DEFINE};
use crate::config::{BusOp, ColorOrder, DisplayProfile, Font, Signal};

/// Column the define values start at
const VALUE_COLUMN: usize = 19;

/// Render a profile as a `User_Setup` header
///
/// Options the profile leaves off are written as disabled `//#define`
/// lines so the header doubles as a template. Unmapped pins are omitted.
pub fn write_setup<W: Write>(profile: &DisplayProfile, out: &mut W) -> fmt::Result {
    writeln!(out, "#define {} {}", SETUP_ID_DEFINE, profile.setup_id)?;
    writeln!(out)?;

    writeln!(
        out,
        "#define {}  // Use the {} screen module",
        profile.controller.flag(),
        profile.controller.flag().trim_end_matches("_DRIVER")
    )?;
    for order in [ColorOrder::Rgb, ColorOrder::Bgr] {
        let disabled = if profile.color_order == Some(order) { "" } else { "//" };
        let name = match order {
            ColorOrder::Rgb => "Red-Green-Blue",
            ColorOrder::Bgr => "Blue-Green-Red",
        };
        writeln!(
            out,
            "{}#define {} {}  // Colour order {}",
            disabled,
            COLOR_ORDER_DEFINE,
            order.header_value(),
            name
        )?;
    }
    writeln!(out)?;

    for (signal, pin) in profile.pins.assigned() {
        let mut value: String<12> = String::new();
        write!(value, "{}", pin.header_value())?;
        writeln!(
            out,
            "#define {:<width$} {:<7} // {}",
            signal.define(),
            value.as_str(),
            signal.description(),
            width = VALUE_COLUMN
        )?;
        if signal == Signal::Backlight {
            write_backlight_level(profile, out)?;
        }
    }
    if !profile.has_backlight_control() {
        write_backlight_level(profile, out)?;
    }
    writeln!(out)?;

    for font in Font::ALL {
        let disabled = if profile.fonts.contains(font) { "" } else { "//" };
        writeln!(
            out,
            "{}#define {:<10}  // {}",
            disabled,
            font.flag(),
            font.description()
        )?;
    }
    writeln!(out)?;

    for op in BusOp::ALL {
        writeln!(
            out,
            "#define {:<width$} {}",
            op.define(),
            profile.bus.get(op),
            width = VALUE_COLUMN
        )?;
    }

    Ok(())
}

/// `TFT_BACKLIGHT_ON` is always written so the level survives a round
/// trip even when no backlight pin is mapped.
fn write_backlight_level<W: Write>(profile: &DisplayProfile, out: &mut W) -> fmt::Result {
    writeln!(
        out,
        "#define {:<width$} {:<7} // Level to turn ON back-light (HIGH or LOW)",
        BACKLIGHT_ON_DEFINE,
        profile.backlight_on.header_value(),
        width = VALUE_COLUMN
    )
}
