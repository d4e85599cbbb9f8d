//! Display profile types
//!
//! Board-agnostic profile structures. Every type here can be built in
//! `const` context so boards can embed their profile as a constant.

pub mod controller;
pub mod fonts;
pub mod pins;
pub mod profile;
pub mod timing;

#[cfg(feature = "serde")]
mod serde_str;

pub use controller::*;
pub use fonts::*;
pub use pins::*;
pub use profile::*;
pub use timing::*;

/// Error returned when a textual name does not match any known variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownName;

impl core::fmt::Display for UnknownName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown name")
    }
}
