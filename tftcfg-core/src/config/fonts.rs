//! Bitmap font selection
//!
//! Each loaded font costs flash. The estimates here are for documentation
//! and budgeting only; nothing enforces them.

use core::fmt;
use core::str::FromStr;

use super::UnknownName;

/// Digits and separators shared by the large numeric fonts
const CLOCK_DIGITS: &str = "1234567890:.";

/// Glyph coverage of a font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Coverage {
    /// Full 8-bit character set of the classic 5x7 font
    Ascii,
    /// Printable ASCII, 0x20-0x7E (96 characters)
    Printable,
    /// Space plus the listed characters only
    Only(&'static str),
}

impl Coverage {
    pub fn covers(self, c: char) -> bool {
        match self {
            Self::Ascii => c.is_ascii(),
            Self::Printable => (' '..='~').contains(&c),
            Self::Only(set) => c == ' ' || set.contains(c),
        }
    }
}

/// Compiled-in font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Font 1, original Adafruit 8 pixel font
    Glcd,
    /// Font 2, small 16 pixel font
    Font2,
    /// Font 4, medium 26 pixel font
    Font4,
    /// Font 6, large 48 pixel numeric font
    Font6,
    /// Font 7, 48 pixel 7-segment font
    Font7,
    /// Font 8, large 75 pixel numeric font
    Font8,
    /// Adafruit_GFX free fonts FF1 to FF48 and custom fonts
    FreeFonts,
}

impl Font {
    pub const ALL: [Font; 7] = [
        Self::Glcd,
        Self::Font2,
        Self::Font4,
        Self::Font6,
        Self::Font7,
        Self::Font8,
        Self::FreeFonts,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Glcd => "glcd",
            Self::Font2 => "font2",
            Self::Font4 => "font4",
            Self::Font6 => "font6",
            Self::Font7 => "font7",
            Self::Font8 => "font8",
            Self::FreeFonts => "gfxff",
        }
    }

    /// Header flag that loads this font
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Glcd => "LOAD_GLCD",
            Self::Font2 => "LOAD_FONT2",
            Self::Font4 => "LOAD_FONT4",
            Self::Font6 => "LOAD_FONT6",
            Self::Font7 => "LOAD_FONT7",
            Self::Font8 => "LOAD_FONT8",
            Self::FreeFonts => "LOAD_GFXFF",
        }
    }

    pub fn from_flag(flag: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.flag() == flag)
    }

    /// Glyph height in pixels (`None` for free fonts, which vary)
    pub const fn height(self) -> Option<u8> {
        match self {
            Self::Glcd => Some(8),
            Self::Font2 => Some(16),
            Self::Font4 => Some(26),
            Self::Font6 | Self::Font7 => Some(48),
            Self::Font8 => Some(75),
            Self::FreeFonts => None,
        }
    }

    /// Approximate flash cost in bytes
    pub const fn flash_bytes(self) -> Option<u32> {
        match self {
            Self::Glcd => Some(1820),
            Self::Font2 => Some(3534),
            Self::Font4 => Some(5848),
            Self::Font6 => Some(2666),
            Self::Font7 => Some(2438),
            Self::Font8 => Some(3256),
            Self::FreeFonts => None,
        }
    }

    pub const fn coverage(self) -> Coverage {
        match self {
            Self::Glcd => Coverage::Ascii,
            Self::Font2 | Self::Font4 | Self::FreeFonts => Coverage::Printable,
            Self::Font6 => Coverage::Only("1234567890:-.apm"),
            Self::Font7 => Coverage::Only(CLOCK_DIGITS),
            Self::Font8 => Coverage::Only("1234567890:-."),
        }
    }

    /// Can every character of `text` be drawn with this font
    pub fn covers(self, text: &str) -> bool {
        let coverage = self.coverage();
        text.chars().all(|c| coverage.covers(c))
    }

    /// Header comment describing the font
    pub const fn description(self) -> &'static str {
        match self {
            Self::Glcd => "Font 1. Original Adafruit 8 pixel font needs ~1820 bytes in FLASH",
            Self::Font2 => "Font 2. Small 16 pixel high font, needs ~3534 bytes in FLASH, 96 characters",
            Self::Font4 => "Font 4. Medium 26 pixel high font, needs ~5848 bytes in FLASH, 96 characters",
            Self::Font6 => "Font 6. Large 48 pixel font, needs ~2666 bytes in FLASH, only characters 1234567890:-.apm",
            Self::Font7 => "Font 7. 7 segment 48 pixel font, needs ~2438 bytes in FLASH, only characters 1234567890:.",
            Self::Font8 => "Font 8. Large 75 pixel font needs ~3256 bytes in FLASH, only characters 1234567890:-.",
            Self::FreeFonts => "FreeFonts. Include access to the 48 Adafruit_GFX free fonts FF1 to FF48 and custom fonts",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Font {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "glcd" | "font1" => Ok(Self::Glcd),
            "font2" => Ok(Self::Font2),
            "font4" => Ok(Self::Font4),
            "font6" => Ok(Self::Font6),
            "font7" => Ok(Self::Font7),
            "font8" => Ok(Self::Font8),
            "gfxff" | "free_fonts" => Ok(Self::FreeFonts),
            _ => Err(UnknownName),
        }
    }
}

/// Set of fonts to compile in
///
/// An empty set leaves font selection to the driver library's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FontSet(u8);

impl FontSet {
    pub const EMPTY: Self = Self(0);

    /// Build a set from a list of fonts (duplicates are ignored)
    pub const fn of(fonts: &[Font]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < fonts.len() {
            bits |= fonts[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub const fn with(self, font: Font) -> Self {
        Self(self.0 | font.bit())
    }

    pub const fn without(self, font: Font) -> Self {
        Self(self.0 & !font.bit())
    }

    pub fn insert(&mut self, font: Font) -> bool {
        let added = !self.contains(font);
        *self = self.with(font);
        added
    }

    pub const fn contains(self, font: Font) -> bool {
        self.0 & font.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Fonts in the set, smallest first
    pub fn iter(self) -> impl Iterator<Item = Font> {
        Font::ALL.into_iter().filter(move |f| self.contains(*f))
    }

    /// Sum of the known flash estimates
    pub fn known_flash_bytes(self) -> u32 {
        self.iter().filter_map(Font::flash_bytes).sum()
    }

    /// True if some member has no flash estimate
    pub fn has_unsized(self) -> bool {
        self.iter().any(|f| f.flash_bytes().is_none())
    }

    /// Tallest loaded font able to draw `text`
    ///
    /// Free fonts are skipped since their height depends on the face.
    pub fn tallest_covering(self, text: &str) -> Option<Font> {
        self.iter()
            .filter(|f| f.height().is_some() && f.covers(text))
            .max_by_key(|f| f.height())
    }

    /// Smallest loaded font able to draw `text`
    pub fn smallest_covering(self, text: &str) -> Option<Font> {
        self.iter()
            .filter(|f| f.height().is_some() && f.covers(text))
            .min_by_key(|f| f.height())
    }
}

impl FromIterator<Font> for FontSet {
    fn from_iter<I: IntoIterator<Item = Font>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FontSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FontSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = FontSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of font names")
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(self, mut seq: A) -> Result<FontSet, A::Error> {
                let mut set = FontSet::EMPTY;
                while let Some(font) = seq.next_element::<Font>()? {
                    set.insert(font);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(Visitor)
    }
}
