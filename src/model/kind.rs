//! Runtime selection of a record type by name
//!
//! The CLI and other hosts that only know a payload's kind as a string go
//! through `RecordKind`; typed callers use `decode::<T>` directly.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::codec::{decode, decode_value, encode_value};
use super::error::{DecodeError, EncodeError, VersionError};
use super::json_schema::json_schema;
use super::version::{check_version, validate_version, VersionStatus};
use crate::records::{load_cells, manipulator, olfactometer, treadmill, water_valve};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown record kind '{0}'")]
pub struct UnknownKind(pub String);

macro_rules! record_kinds {
    ($($variant:ident($name:literal) => $ty:ty),+ $(,)?) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum RecordKind {
            $($variant),+
        }

        impl RecordKind {
            pub const ALL: &'static [RecordKind] = &[$(RecordKind::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $(RecordKind::$variant => $name),+
                }
            }

            pub fn title(self) -> &'static str {
                match self {
                    $(RecordKind::$variant => <$ty as super::field::ConfigRecord>::TITLE),+
                }
            }

            pub fn decode(self, payload: &str) -> Result<AnyRecord, DecodeError> {
                match self {
                    $(RecordKind::$variant => decode::<$ty>(payload).map(AnyRecord::$variant)),+
                }
            }

            pub fn decode_value(self, value: Value) -> Result<AnyRecord, DecodeError> {
                match self {
                    $(RecordKind::$variant => decode_value::<$ty>(value).map(AnyRecord::$variant)),+
                }
            }

            pub fn construct_default(self) -> AnyRecord {
                match self {
                    $(RecordKind::$variant => AnyRecord::$variant(<$ty>::default())),+
                }
            }

            pub fn json_schema(self) -> Value {
                match self {
                    $(RecordKind::$variant => json_schema::<$ty>()),+
                }
            }
        }

        impl FromStr for RecordKind {
            type Err = UnknownKind;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(RecordKind::$variant),)+
                    _ => Err(UnknownKind(s.to_string())),
                }
            }
        }

        /// A decoded record of any kind.
        #[derive(Clone, Debug, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum AnyRecord {
            $($variant($ty)),+
        }

        impl AnyRecord {
            pub fn kind(&self) -> RecordKind {
                match self {
                    $(AnyRecord::$variant(_) => RecordKind::$variant),+
                }
            }

            pub fn to_value(&self) -> Result<Value, EncodeError> {
                match self {
                    $(AnyRecord::$variant(record) => encode_value(record)),+
                }
            }
        }
    };
}

record_kinds! {
    OlfactometerChannelConfig("olfactometer-channel-config") => olfactometer::OlfactometerChannelConfig,
    OlfactometerCalibrationLogic("olfactometer-calibration-logic") => olfactometer::OlfactometerCalibrationLogic,
    OlfactometerCalibrationRig("olfactometer-calibration-rig") => olfactometer::OlfactometerCalibrationRig,
    WaterValveCalibrationLogic("water-valve-calibration-logic") => water_valve::WaterValveCalibrationLogic,
    WaterValveCalibration("water-valve-calibration") => water_valve::WaterValveCalibration,
    TreadmillCalibrationRig("treadmill-calibration-rig") => treadmill::TreadmillCalibrationRig,
    TreadmillCalibration("treadmill-calibration") => treadmill::TreadmillCalibration,
    ManipulatorCalibrationLogic("manipulator-calibration-logic") => manipulator::ManipulatorCalibrationLogic,
    ManipulatorCalibrationRig("manipulator-calibration-rig") => manipulator::ManipulatorCalibrationRig,
    ManipulatorCalibration("manipulator-calibration") => manipulator::ManipulatorCalibration,
    LoadCellsOperationControl("load-cells-operation-control") => load_cells::LoadCellsOperationControl,
    LoadCellsCalibration("load-cells-calibration") => load_cells::LoadCellsCalibration,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl RecordKind {
    /// Whether records of this kind carry a schema version.
    pub fn is_versioned(self) -> bool {
        self.construct_default().version().is_some()
    }
}

impl AnyRecord {
    /// Carried schema version, for kinds that have one.
    pub fn version(&self) -> Option<&str> {
        use super::version::Versioned;

        match self {
            AnyRecord::OlfactometerCalibrationLogic(r) => Some(r.version()),
            AnyRecord::OlfactometerCalibrationRig(r) => Some(r.version()),
            AnyRecord::WaterValveCalibrationLogic(r) => Some(r.version()),
            AnyRecord::TreadmillCalibrationRig(r) => Some(r.version()),
            AnyRecord::ManipulatorCalibrationLogic(r) => Some(r.version()),
            AnyRecord::ManipulatorCalibrationRig(r) => Some(r.version()),
            AnyRecord::LoadCellsOperationControl(r) => Some(r.version()),
            AnyRecord::OlfactometerChannelConfig(_)
            | AnyRecord::WaterValveCalibration(_)
            | AnyRecord::TreadmillCalibration(_)
            | AnyRecord::ManipulatorCalibration(_)
            | AnyRecord::LoadCellsCalibration(_) => None,
        }
    }

    pub fn check_version(&self) -> Option<Result<VersionStatus, VersionError>> {
        match self {
            AnyRecord::OlfactometerCalibrationLogic(r) => Some(check_version(r)),
            AnyRecord::OlfactometerCalibrationRig(r) => Some(check_version(r)),
            AnyRecord::WaterValveCalibrationLogic(r) => Some(check_version(r)),
            AnyRecord::TreadmillCalibrationRig(r) => Some(check_version(r)),
            AnyRecord::ManipulatorCalibrationLogic(r) => Some(check_version(r)),
            AnyRecord::ManipulatorCalibrationRig(r) => Some(check_version(r)),
            AnyRecord::LoadCellsOperationControl(r) => Some(check_version(r)),
            _ => None,
        }
    }

    pub fn validate_version(&self, expected: &str) -> Option<bool> {
        match self {
            AnyRecord::OlfactometerCalibrationLogic(r) => Some(validate_version(r, expected)),
            AnyRecord::OlfactometerCalibrationRig(r) => Some(validate_version(r, expected)),
            AnyRecord::WaterValveCalibrationLogic(r) => Some(validate_version(r, expected)),
            AnyRecord::TreadmillCalibrationRig(r) => Some(validate_version(r, expected)),
            AnyRecord::ManipulatorCalibrationLogic(r) => Some(validate_version(r, expected)),
            AnyRecord::ManipulatorCalibrationRig(r) => Some(validate_version(r, expected)),
            AnyRecord::LoadCellsOperationControl(r) => Some(validate_version(r, expected)),
            _ => None,
        }
    }
}
