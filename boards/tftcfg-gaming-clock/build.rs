//! Build script for tftcfg-gaming-clock
//!
//! Validates display.toml and generates the embedded profile.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    tftcfg_build::configure("display.toml");
}
