//! Build-script support for tftcfg display profiles
//!
//! A board's `build.rs` calls [`configure`]:
//!
//! ```no_run
//! fn main() {
//!     tftcfg_build::configure("display.toml");
//! }
//! ```
//!
//! and the board embeds the result:
//!
//! ```ignore
//! pub const PROFILE: tftcfg_core::DisplayProfile =
//!     include!(concat!(env!("OUT_DIR"), "/display_profile.rs"));
//! ```

pub mod codegen;
pub mod error;
pub mod file;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tftcfg_core::DisplayProfile;

pub use error::{BuildError, Result};
pub use file::{load_profile, parse_profile, to_toml};

/// Name of the generated Rust expression file in `OUT_DIR`
pub const PROFILE_FILE: &str = "display_profile.rs";
/// Name of the generated header in `OUT_DIR`
pub const HEADER_FILE: &str = "User_Setup.h";

/// Paths written by [`emit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    pub profile: PathBuf,
    pub header: PathBuf,
}

/// Write `display_profile.rs` and `User_Setup.h` into `out_dir`
pub fn emit(profile: &DisplayProfile, out_dir: impl AsRef<Path>) -> Result<Emitted> {
    let out_dir = out_dir.as_ref();
    let emitted = Emitted {
        profile: out_dir.join(PROFILE_FILE),
        header: out_dir.join(HEADER_FILE),
    };

    write_file(&emitted.profile, &codegen::profile_source(profile))?;
    write_file(&emitted.header, &codegen::header_source(profile))?;
    Ok(emitted)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// One-line description of a profile for build output
pub fn summary(profile: &DisplayProfile) -> String {
    let mut line = format!(
        "setup {}: {} at {} MHz",
        profile.setup_id,
        profile.controller,
        profile.bus.write_hz as f32 / 1_000_000.0
    );

    if let Some(order) = profile.color_order {
        line.push_str(&format!(", {} order", order));
    }

    if profile.fonts.is_empty() {
        line.push_str(", default fonts");
    } else {
        line.push_str(&format!(
            ", {} fonts (~{} bytes flash",
            profile.fonts.len(),
            profile.fonts.known_flash_bytes()
        ));
        if profile.fonts.has_unsized() {
            line.push_str(" + free fonts");
        }
        line.push(')');
    }

    if profile.has_touch() {
        line.push_str(", touch");
    }
    if let Some(pin) = profile.pins.backlight {
        line.push_str(&format!(", backlight on {} ({})", pin, profile.backlight_on));
    }
    line
}

/// Load, validate and emit a profile into `OUT_DIR`
///
/// Prints `cargo:rerun-if-changed` for the profile file. Returns the
/// profile so a build script can inspect it further.
pub fn try_configure(path: impl AsRef<Path>) -> Result<DisplayProfile> {
    let path = path.as_ref();
    println!("cargo:rerun-if-changed={}", path.display());

    let out_dir = env::var_os("OUT_DIR").ok_or(BuildError::NoOutDir)?;
    let profile = load_profile(path)?;
    let emitted = emit(&profile, &out_dir)?;

    println!(
        "cargo:rustc-env=TFTCFG_USER_SETUP={}",
        emitted.header.display()
    );
    println!(
        "cargo:warning={} validated: {}",
        path.display(),
        summary(&profile)
    );
    Ok(profile)
}

/// [`try_configure`] for build scripts: fails the build on any error
pub fn configure(path: impl AsRef<Path>) -> DisplayProfile {
    let path = path.as_ref();
    match try_configure(path) {
        Ok(profile) => profile,
        Err(e) => panic!("{}", error_box(&path.display().to_string(), &e.to_string())),
    }
}

const BOX_WIDTH: usize = 64;

/// Frame an error message for build output
fn error_box(file: &str, message: &str) -> String {
    let rule = "═".repeat(BOX_WIDTH + 2);
    let mut out = format!("\n╔{}╗\n", rule);
    out.push_str(&box_line(&format!("ERROR: invalid display profile {}", file)));
    out.push_str(&format!("╠{}╣\n", rule));
    for line in message.lines() {
        out.push_str(&box_line(line));
    }
    out.push_str(&format!("╚{}╝\n", rule));
    out
}

fn box_line(line: &str) -> String {
    let truncated: String = if line.chars().count() > BOX_WIDTH {
        let mut s: String = line.chars().take(BOX_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        line.to_string()
    };
    format!("║ {:<width$} ║\n", truncated, width = BOX_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tftcfg_core::presets::{ESP_GAMING_CLOCK_ILI9341, ESP_GAMING_CLOCK_ILI9341_BGR};
    use tftcfg_core::{parse_setup, BusTiming, ControllerKind, Font, FontSet};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("tftcfg-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_emit_writes_both_files() {
        let dir = scratch_dir("emit");
        let profile = ESP_GAMING_CLOCK_ILI9341_BGR.profile;

        let emitted = emit(&profile, &dir).unwrap();
        assert_eq!(emitted.profile, dir.join("display_profile.rs"));

        let rust = fs::read_to_string(&emitted.profile).unwrap();
        assert_eq!(rust, codegen::profile_source(&profile));

        let header = fs::read_to_string(&emitted.header).unwrap();
        assert_eq!(parse_setup(&header).unwrap(), profile);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_emit_into_missing_dir() {
        let dir = env::temp_dir().join("tftcfg-does-not-exist").join("out");
        let err = emit(&ESP_GAMING_CLOCK_ILI9341.profile, &dir).unwrap_err();
        assert!(matches!(err, BuildError::Write { .. }));
    }

    #[test]
    fn test_summary() {
        let line = summary(&ESP_GAMING_CLOCK_ILI9341.profile);
        assert_eq!(
            line,
            "setup 1: ili9341 at 40 MHz, 5 fonts (~17742 bytes flash), touch, backlight on D1 (high)"
        );

        let bare = DisplayProfile::new(ControllerKind::St7789, BusTiming::new(27_000_000, 1, 1))
            .with_fonts(FontSet::of(&[Font::FreeFonts]));
        assert_eq!(
            summary(&bare),
            "setup 0: st7789 at 27 MHz, 1 fonts (~0 bytes flash + free fonts)"
        );
    }

    #[test]
    fn test_error_box() {
        let text = error_box("display.toml", "unknown preset 'x'\nsecond line");
        assert!(text.contains("║ ERROR: invalid display profile display.toml"));
        assert!(text.contains("║ unknown preset 'x'"));
        assert!(text.contains("║ second line"));

        let long = "x".repeat(100);
        let text = error_box("display.toml", &long);
        assert!(text.contains(&format!("{}...", "x".repeat(BOX_WIDTH - 3))));
    }
}
