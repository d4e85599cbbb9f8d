//! Profile consumers
//!
//! Small helpers that apply a [`DisplayProfile`] to hardware through the
//! `tftcfg-hal` traits:
//!
//! - Backlight control honouring the active level
//! - Touch pen-interrupt reading
//! - Per-transaction SPI clock plan
//!
//! [`DisplayProfile`]: tftcfg_core::DisplayProfile

#![no_std]
#![deny(unsafe_code)]

pub mod backlight;
pub mod bus;
pub mod touch;

pub use backlight::Backlight;
pub use bus::ClockPlan;
pub use touch::TouchIrq;
