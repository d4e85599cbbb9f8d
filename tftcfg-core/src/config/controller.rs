//! Display controller selection
//!
//! The controller decides which command set and init sequence the driver
//! library compiles in. A profile selects exactly one.

use core::fmt;
use core::str::FromStr;

use super::UnknownName;

/// Display controller variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerKind {
    /// ILI9341 (240x320, most common 2.2"-2.8" modules)
    #[default]
    Ili9341,
    /// Alternative ILI9341 init sequence
    Ili9341Alt,
    /// ST7735 (128x160 and similar)
    St7735,
    /// ILI9163
    Ili9163,
    /// S6D02A1
    S6d02a1,
    /// ILI9486 on Raspberry Pi style 16 bit shift-register boards
    RpiIli9486,
    /// HX8357D
    Hx8357d,
    /// ILI9481
    Ili9481,
    /// ILI9486
    Ili9486,
    /// ILI9488
    Ili9488,
    /// ST7789 (240x240 and 240x320)
    St7789,
    /// Minimal ST7789 init sequence
    St7789Alt,
    /// R61581
    R61581,
    /// RM68140
    Rm68140,
    /// ST7796
    St7796,
    /// SSD1351 OLED
    Ssd1351,
    /// GC9A01 round panels
    Gc9a01,
}

impl ControllerKind {
    /// Every supported controller
    pub const ALL: [ControllerKind; 17] = [
        Self::Ili9341,
        Self::Ili9341Alt,
        Self::St7735,
        Self::Ili9163,
        Self::S6d02a1,
        Self::RpiIli9486,
        Self::Hx8357d,
        Self::Ili9481,
        Self::Ili9486,
        Self::Ili9488,
        Self::St7789,
        Self::St7789Alt,
        Self::R61581,
        Self::Rm68140,
        Self::St7796,
        Self::Ssd1351,
        Self::Gc9a01,
    ];

    /// Short lowercase name used in profile files
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ili9341 => "ili9341",
            Self::Ili9341Alt => "ili9341_2",
            Self::St7735 => "st7735",
            Self::Ili9163 => "ili9163",
            Self::S6d02a1 => "s6d02a1",
            Self::RpiIli9486 => "rpi_ili9486",
            Self::Hx8357d => "hx8357d",
            Self::Ili9481 => "ili9481",
            Self::Ili9486 => "ili9486",
            Self::Ili9488 => "ili9488",
            Self::St7789 => "st7789",
            Self::St7789Alt => "st7789_2",
            Self::R61581 => "r61581",
            Self::Rm68140 => "rm68140",
            Self::St7796 => "st7796",
            Self::Ssd1351 => "ssd1351",
            Self::Gc9a01 => "gc9a01",
        }
    }

    /// Header flag that selects this controller (e.g. `ILI9341_DRIVER`)
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Ili9341 => "ILI9341_DRIVER",
            Self::Ili9341Alt => "ILI9341_2_DRIVER",
            Self::St7735 => "ST7735_DRIVER",
            Self::Ili9163 => "ILI9163_DRIVER",
            Self::S6d02a1 => "S6D02A1_DRIVER",
            Self::RpiIli9486 => "RPI_ILI9486_DRIVER",
            Self::Hx8357d => "HX8357D_DRIVER",
            Self::Ili9481 => "ILI9481_DRIVER",
            Self::Ili9486 => "ILI9486_DRIVER",
            Self::Ili9488 => "ILI9488_DRIVER",
            Self::St7789 => "ST7789_DRIVER",
            Self::St7789Alt => "ST7789_2_DRIVER",
            Self::R61581 => "R61581_DRIVER",
            Self::Rm68140 => "RM68140_DRIVER",
            Self::St7796 => "ST7796_DRIVER",
            Self::Ssd1351 => "SSD1351_DRIVER",
            Self::Gc9a01 => "GC9A01_DRIVER",
        }
    }

    /// Look up a controller by its header flag
    pub fn from_flag(flag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.flag() == flag)
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControllerKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or(UnknownName)
    }
}

/// Pixel colour order override
///
/// Panels are wired either way; `None` in the profile keeps the
/// controller's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorOrder {
    /// Red-Green-Blue
    Rgb,
    /// Blue-Green-Red
    Bgr,
}

impl ColorOrder {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Bgr => "bgr",
        }
    }

    /// Value of the `TFT_RGB_ORDER` define
    pub const fn header_value(self) -> &'static str {
        match self {
            Self::Rgb => "TFT_RGB",
            Self::Bgr => "TFT_BGR",
        }
    }

    pub fn from_header_value(value: &str) -> Option<Self> {
        match value {
            "TFT_RGB" => Some(Self::Rgb),
            "TFT_BGR" => Some(Self::Bgr),
            _ => None,
        }
    }
}

impl fmt::Display for ColorOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorOrder {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgb" | "RGB" => Ok(Self::Rgb),
            "bgr" | "BGR" => Ok(Self::Bgr),
            _ => Err(UnknownName),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_lookup() {
        assert_eq!(
            ControllerKind::from_flag("ILI9341_DRIVER"),
            Some(ControllerKind::Ili9341)
        );
        assert_eq!(
            ControllerKind::from_flag("ST7789_2_DRIVER"),
            Some(ControllerKind::St7789Alt)
        );
        assert_eq!(ControllerKind::from_flag("ILI9341"), None);
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in ControllerKind::ALL.iter().enumerate() {
            for b in &ControllerKind::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
                assert_ne!(a.flag(), b.flag());
            }
        }
    }

    #[test]
    fn test_parse_name() {
        assert_eq!("ili9341".parse::<ControllerKind>(), Ok(ControllerKind::Ili9341));
        assert_eq!("GC9A01".parse::<ControllerKind>(), Ok(ControllerKind::Gc9a01));
        assert_eq!("rpi_ili9486".parse::<ControllerKind>(), Ok(ControllerKind::RpiIli9486));
        assert_eq!("ili".parse::<ControllerKind>(), Err(UnknownName));
    }

    #[test]
    fn test_color_order() {
        assert_eq!(ColorOrder::from_header_value("TFT_BGR"), Some(ColorOrder::Bgr));
        assert_eq!(ColorOrder::Rgb.header_value(), "TFT_RGB");
        assert_eq!(ColorOrder::from_header_value("TFT_GRB"), None);
    }
}
