//! TOML profile files
//!
//! A file either spells out a whole profile or starts from a preset:
//!
//! ```toml
//! preset = "esp_gaming_clock_ili9341"
//! color_order = "bgr"
//!
//! [pins]
//! rst = "none"
//! ```
//!
//! Keys next to `preset` override the preset's values. Without a preset,
//! `controller` and all three `bus` clocks are required.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use tftcfg_core::{
    parse_setup, presets, BacklightLevel, BusOp, BusTiming, ColorOrder, ControllerKind,
    DisplayProfile, FontSet, PinId, Signal,
};

use crate::error::{BuildError, Result};

/// Raw contents of a profile file, before the preset is applied
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileFile {
    /// Preset to start from
    pub preset: Option<String>,
    pub setup_id: Option<u8>,
    pub controller: Option<ControllerKind>,
    pub color_order: Option<ColorChoice>,
    pub backlight_on: Option<BacklightLevel>,
    pub fonts: Option<FontSet>,
    #[serde(default)]
    pub pins: PinOverrides,
    #[serde(default)]
    pub bus: BusOverrides,
}

/// Colour order setting in a file
///
/// `default` clears an order a preset sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    Default,
    Rgb,
    Bgr,
}

impl From<ColorChoice> for Option<ColorOrder> {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Default => None,
            ColorChoice::Rgb => Some(ColorOrder::Rgb),
            ColorChoice::Bgr => Some(ColorOrder::Bgr),
        }
    }
}

/// Pin setting in a file: a pin, or `"none"` / `-1` to unmap it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinSetting {
    Unmapped,
    Pin(PinId),
}

impl PinSetting {
    pub fn pin(self) -> Option<PinId> {
        match self {
            Self::Unmapped => None,
            Self::Pin(pin) => Some(pin),
        }
    }
}

impl<'de> Deserialize<'de> for PinSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct SettingVisitor;

        impl<'de> Visitor<'de> for SettingVisitor {
            type Value = PinSetting;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a pin such as \"D8\", \"gpio15\" or 15, or \"none\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
                match v {
                    "none" | "-1" => Ok(PinSetting::Unmapped),
                    _ => v
                        .parse()
                        .map(PinSetting::Pin)
                        .map_err(|e| E::custom(format_args!("invalid pin '{}': {}", v, e))),
                }
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
                if v == -1 {
                    return Ok(PinSetting::Unmapped);
                }
                let gpio = u8::try_from(v)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))?;
                let pin = PinId::Gpio(gpio);
                if !pin.is_valid() {
                    return Err(E::invalid_value(de::Unexpected::Signed(v), &self));
                }
                Ok(PinSetting::Pin(pin))
            }
        }

        deserializer.deserialize_any(SettingVisitor)
    }
}

/// `[pins]` table
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PinOverrides {
    pub mosi: Option<PinSetting>,
    pub miso: Option<PinSetting>,
    pub sclk: Option<PinSetting>,
    pub cs: Option<PinSetting>,
    pub dc: Option<PinSetting>,
    pub rst: Option<PinSetting>,
    pub backlight: Option<PinSetting>,
    pub touch_cs: Option<PinSetting>,
    pub touch_irq: Option<PinSetting>,
}

impl PinOverrides {
    pub fn get(&self, signal: Signal) -> Option<PinSetting> {
        match signal {
            Signal::Mosi => self.mosi,
            Signal::Miso => self.miso,
            Signal::Sclk => self.sclk,
            Signal::Cs => self.cs,
            Signal::Dc => self.dc,
            Signal::Rst => self.rst,
            Signal::Backlight => self.backlight,
            Signal::TouchCs => self.touch_cs,
            Signal::TouchIrq => self.touch_irq,
        }
    }
}

/// `[bus]` table
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BusOverrides {
    pub write_hz: Option<u32>,
    pub read_hz: Option<u32>,
    pub touch_hz: Option<u32>,
}

impl BusOverrides {
    pub fn get(&self, op: BusOp) -> Option<u32> {
        match op {
            BusOp::Write => self.write_hz,
            BusOp::Read => self.read_hz,
            BusOp::Touch => self.touch_hz,
        }
    }
}

impl ProfileFile {
    /// Apply the file on top of its preset and validate the result
    pub fn resolve(self) -> Result<DisplayProfile> {
        let mut profile = match &self.preset {
            Some(name) => {
                presets::find(name)
                    .ok_or_else(|| BuildError::UnknownPreset(name.clone()))?
                    .profile
            }
            None => {
                let controller = self.controller.ok_or(BuildError::Missing("controller"))?;
                let mut bus = BusTiming::new(0, 0, 0);
                for op in BusOp::ALL {
                    bus.set(op, self.bus.get(op).ok_or_else(|| missing_clock(op))?);
                }
                DisplayProfile::new(controller, bus)
            }
        };

        if let Some(id) = self.setup_id {
            profile.setup_id = id;
        }
        if let Some(controller) = self.controller {
            profile.controller = controller;
        }
        if let Some(choice) = self.color_order {
            profile.color_order = choice.into();
        }
        if let Some(level) = self.backlight_on {
            profile.backlight_on = level;
        }
        if let Some(fonts) = self.fonts {
            profile.fonts = fonts;
        }
        for signal in Signal::ALL {
            if let Some(setting) = self.pins.get(signal) {
                profile.pins.set(signal, setting.pin());
            }
        }
        for op in BusOp::ALL {
            if let Some(hz) = self.bus.get(op) {
                profile.bus.set(op, hz);
            }
        }

        profile.validate()?;
        Ok(profile)
    }
}

fn missing_clock(op: BusOp) -> BuildError {
    BuildError::Missing(match op {
        BusOp::Write => "bus.write_hz",
        BusOp::Read => "bus.read_hz",
        BusOp::Touch => "bus.touch_hz",
    })
}

/// Parse and validate a TOML profile
pub fn parse_profile(text: &str) -> Result<DisplayProfile> {
    let file: ProfileFile = toml::from_str(text)?;
    file.resolve()
}

/// Load a profile from disk
///
/// `.h` files are read as `User_Setup` headers, anything else as TOML.
/// Errors name the file.
pub fn load_profile(path: impl AsRef<Path>) -> Result<DisplayProfile> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| BuildError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let is_header = path.extension().is_some_and(|ext| ext == "h");
    let parsed = if is_header {
        parse_setup(&text).map_err(BuildError::from)
    } else {
        parse_profile(&text)
    };

    parsed.map_err(|e| BuildError::InFile {
        path: path.to_path_buf(),
        source: Box::new(e),
    })
}

/// Serialize a profile to the TOML form `parse_profile` reads
pub fn to_toml(profile: &DisplayProfile) -> Result<String> {
    Ok(toml::to_string(profile)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tftcfg_core::presets::{ESP_GAMING_CLOCK_ILI9341, ESP_GAMING_CLOCK_ILI9341_BGR};
    use tftcfg_core::{Font, ProfileError};

    const GAMING_CLOCK: &str = r#"
setup_id = 1
controller = "ili9341"
backlight_on = "high"
fonts = ["font2", "font4", "font6", "font7", "font8"]

[pins]
cs = "D8"
dc = "D3"
rst = "D0"
backlight = "D1"
touch_cs = "D2"
touch_irq = "D4"

[bus]
write_hz = 40_000_000
read_hz = 20_000_000
touch_hz = 2_500_000
"#;

    #[test]
    fn test_full_profile() {
        let profile = parse_profile(GAMING_CLOCK).unwrap();
        assert_eq!(profile, ESP_GAMING_CLOCK_ILI9341.profile);
    }

    #[test]
    fn test_preset_only() {
        let profile = parse_profile("preset = \"esp_gaming_clock_ili9341_bgr\"").unwrap();
        assert_eq!(profile, ESP_GAMING_CLOCK_ILI9341_BGR.profile);
    }

    #[test]
    fn test_preset_overrides() {
        let text = r#"
preset = "esp_gaming_clock_ili9341_bgr"
color_order = "default"
fonts = ["glcd"]

[pins]
rst = "none"
touch_irq = -1
mosi = 13

[bus]
write_hz = 27_000_000
"#;
        let profile = parse_profile(text).unwrap();
        let base = ESP_GAMING_CLOCK_ILI9341.profile;

        assert_eq!(profile.color_order, None);
        assert_eq!(profile.fonts, FontSet::of(&[Font::Glcd]));
        assert_eq!(profile.pins.rst, None);
        assert_eq!(profile.pins.touch_irq, None);
        assert_eq!(profile.pins.mosi, Some(PinId::Gpio(13)));
        assert_eq!(profile.pins.cs, base.pins.cs);
        assert_eq!(profile.bus.write_hz, 27_000_000);
        assert_eq!(profile.bus.read_hz, base.bus.read_hz);
    }

    #[test]
    fn test_missing_required_keys() {
        let err = parse_profile("[bus]\nwrite_hz = 1\nread_hz = 1\ntouch_hz = 1\n").unwrap_err();
        assert!(matches!(err, BuildError::Missing("controller")));

        let err = parse_profile("controller = \"st7789\"\n[bus]\nwrite_hz = 1\n").unwrap_err();
        assert!(matches!(err, BuildError::Missing("bus.read_hz")));
    }

    #[test]
    fn test_unknown_preset() {
        let err = parse_profile("preset = \"cheap_yellow_display\"").unwrap_err();
        assert!(matches!(err, BuildError::UnknownPreset(ref name) if name == "cheap_yellow_display"));
    }

    #[test]
    fn test_schema_errors() {
        assert!(matches!(
            parse_profile("controller = \"ili9999\""),
            Err(BuildError::Toml(_))
        ));
        assert!(matches!(
            parse_profile("preset = \"esp_gaming_clock_ili9341\"\nbrightness = 3"),
            Err(BuildError::Toml(_))
        ));
        assert!(matches!(
            parse_profile("preset = \"esp_gaming_clock_ili9341\"\n[pins]\ncs = \"D11\""),
            Err(BuildError::Toml(_))
        ));
    }

    #[test]
    fn test_overrides_are_validated() {
        // D3 is already the DC pin
        let text = "preset = \"esp_gaming_clock_ili9341\"\n[pins]\nmiso = \"gpio0\"\n";
        match parse_profile(text) {
            Err(BuildError::Profile(ProfileError::DuplicatePin(c))) => {
                assert_eq!(c.gpio, 0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_presets_round_trip_through_toml() {
        for preset in presets::ALL {
            let text = to_toml(&preset.profile).unwrap();
            assert_eq!(parse_profile(&text).unwrap(), preset.profile, "{}", preset.name);
        }
    }

    #[test]
    fn test_load_profile_names_file() {
        let dir = std::env::temp_dir().join(format!("tftcfg-file-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let good = dir.join("display.toml");
        fs::write(&good, GAMING_CLOCK).unwrap();
        assert_eq!(load_profile(&good).unwrap(), ESP_GAMING_CLOCK_ILI9341.profile);

        let bad = dir.join("bad.toml");
        fs::write(&bad, "preset = \"nope\"").unwrap();
        let err = load_profile(&bad).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
        assert!(matches!(err, BuildError::InFile { .. }));

        let missing = dir.join("missing.toml");
        assert!(matches!(load_profile(&missing), Err(BuildError::Read { .. })));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_header() {
        let dir = std::env::temp_dir().join(format!("tftcfg-header-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let path = dir.join("User_Setup.h");
        let mut header = String::new();
        tftcfg_core::write_setup(&ESP_GAMING_CLOCK_ILI9341_BGR.profile, &mut header).unwrap();
        fs::write(&path, header).unwrap();
        assert_eq!(load_profile(&path).unwrap(), ESP_GAMING_CLOCK_ILI9341_BGR.profile);

        fs::remove_dir_all(&dir).unwrap();
    }
}
