//! tftcfg hardware abstraction layer
//!
//! The traits here are what profile consumers need from a chip HAL: a
//! few digital pins and a way to describe SPI bus settings. Chip HALs (or
//! thin wrappers over `embedded-hal` types) implement them.
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`spi::SpiConfig`] - SPI clock and mode for one kind of transaction

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

pub use gpio::{InputPin, OutputPin};
pub use spi::{Mode, SpiConfig};
