//! Serde support for types with a canonical text form
//!
//! The profile types serialize as their short lowercase names (`"ili9341"`,
//! `"D8"`, `"font4"`) so TOML profiles stay readable.

/// Implement `Serialize`/`Deserialize` through `Display` and `FromStr`
macro_rules! impl_str_serde {
    ($ty:ty, $expecting:literal) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct Visitor;

                impl<'de> serde::de::Visitor<'de> for Visitor {
                    type Value = $ty;

                    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                        f.write_str($expecting)
                    }

                    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                        v.parse()
                            .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
                    }
                }

                deserializer.deserialize_str(Visitor)
            }
        }
    };
}

impl_str_serde!(super::ControllerKind, "a display controller name such as \"ili9341\"");
impl_str_serde!(super::ColorOrder, "\"rgb\" or \"bgr\"");
impl_str_serde!(super::BacklightLevel, "\"high\" or \"low\"");
impl_str_serde!(super::Font, "a font name such as \"font4\"");
impl_str_serde!(super::PinId, "a pin such as \"D8\" or \"gpio15\"");
