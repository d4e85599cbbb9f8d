//! Board-agnostic display setup profiles
//!
//! This crate contains the display configuration model consumed by TFT
//! driver builds:
//!
//! - Controller, colour order, pin wiring, font and SPI timing types
//! - Profile validation (usable in `const` context)
//! - Named presets for known boards
//! - `User_Setup` header rendering and parsing

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod presets;
pub mod setup;

pub use config::*;
pub use presets::Preset;
pub use setup::{parse_setup, write_setup, SetupError};
