//! Rust types mirroring the rig calibration JSON schemas
//!
//! One module per schema family:
//! - `harp`: device type identifiers shared by every rig schema
//! - `olfactometer`: olfactometer_calibration_logic.json / olfactometer_calibration_rig.json
//! - `water_valve`: water_valve_calibration.json
//! - `treadmill`: treadmill_calibration_rig.json
//! - `manipulator`: aind_manipulator_calibration.json / aind_manipulator_calibration_rig.json
//! - `load_cells`: load_cells_calibration.json
//!
//! The types only carry data: wire names, defaults and enum representations.
//! Field order follows the property order of the schemas.
//!
//! ## Import Policy
//!
//! **Do not import types directly from this crate.** Use the re-exports in
//! `rigcal::records::<family>`, which also bind each type to its field
//! descriptors. Decoding through `serde_json` directly skips required-field
//! and enum diagnostics.

#![allow(clippy::derivable_impls)]

mod timestamp;

pub use timestamp::Timestamp;

/// Integer value of a JSON number, accepting whole floats such as `50.0`.
pub fn whole_number(number: &serde_json::Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Implements the integer wire representation for a closed enum.
///
/// Mirrors what schema generators emit for `enum: [100, 1000]`-style
/// integer enums: `TryFrom<i64>` plus serde impls routed through it.
/// Whole floats (`1000.0`) decode like the integer they spell.
macro_rules! integer_enum {
    ($name:ident { $($variant:ident = $value:literal),+ $(,)? }) => {
        impl $name {
            pub const fn value(self) -> i64 {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }
        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.value()
            }
        }
        impl std::convert::TryFrom<i64> for $name {
            type Error = &'static str;
            fn try_from(value: i64) -> Result<Self, &'static str> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    _ => Err("invalid value"),
                }
            }
        }
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.value())
            }
        }
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_i64(self.value())
            }
        }
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let number = <serde_json::Number as serde::Deserialize>::deserialize(deserializer)?;
                let raw = $crate::whole_number(&number).ok_or_else(|| {
                    <D::Error as serde::de::Error>::custom(format!("invalid value: {number}"))
                })?;
                Self::try_from(raw)
                    .map_err(|e| <D::Error as serde::de::Error>::custom(format!("{e}: {raw}")))
            }
        }
    };
}

pub(crate) use integer_enum;

pub mod harp;
pub mod load_cells;
pub mod manipulator;
pub mod olfactometer;
pub mod treadmill;
pub mod water_valve;
