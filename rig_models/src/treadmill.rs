// Types from treadmill_calibration_rig.json

use serde::{Deserialize, Serialize};

use crate::harp::{who_am_i, HarpDeviceType};
use crate::Timestamp;

pub const RIG_SCHEMA_VERSION: &str = "0.0.0";
pub const PKG_VERSION: &str = "0.8.7";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TreadmillCalibrationInput {}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TreadmillCalibrationOutput {
    #[doc = "Wheel diameter"]
    #[serde(default = "defaults::wheel_diameter")]
    pub wheel_diameter: f64,
    #[doc = "Pulses per revolution"]
    #[serde(default = "defaults::pulses_per_revolution")]
    pub pulses_per_revolution: i64,
    #[doc = "Invert direction"]
    #[serde(default)]
    pub invert_direction: bool,
    #[doc = "Brake lookup calibration. Each pair of values define (input [torque], output [brake set-point U16])"]
    pub brake_lookup_calibration: Vec<[f64; 2]>,
}
impl Default for TreadmillCalibrationOutput {
    fn default() -> Self {
        Self {
            wheel_diameter: defaults::wheel_diameter(),
            pulses_per_revolution: defaults::pulses_per_revolution(),
            invert_direction: false,
            brake_lookup_calibration: Vec::new(),
        }
    }
}

#[doc = "Treadmill calibration class"]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TreadmillCalibration {
    #[doc = "Must match a device name in rig/instrument"]
    #[serde(default = "defaults::device_name")]
    pub device_name: String,
    pub input: TreadmillCalibrationInput,
    pub output: TreadmillCalibrationOutput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(default = "defaults::description")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
impl Default for TreadmillCalibration {
    fn default() -> Self {
        Self {
            device_name: defaults::device_name(),
            input: TreadmillCalibrationInput::default(),
            output: TreadmillCalibrationOutput::default(),
            date: None,
            description: defaults::description(),
            notes: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Treadmill {
    #[serde(default = "defaults::device_type")]
    pub device_type: HarpDeviceType,
    #[doc = "Additional settings"]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_settings: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calibration: Option<TreadmillCalibration>,
    #[serde(default = "defaults::who_am_i")]
    pub who_am_i: i64,
    #[doc = "Device serial number"]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[doc = "Device port name"]
    pub port_name: String,
}
impl Default for Treadmill {
    fn default() -> Self {
        Self {
            device_type: defaults::device_type(),
            additional_settings: None,
            calibration: None,
            who_am_i: defaults::who_am_i(),
            serial_number: None,
            port_name: String::new(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TreadmillCalibrationRig {
    #[serde(default = "defaults::pkg_version")]
    pub aind_behavior_services_pkg_version: String,
    #[serde(default = "defaults::rig_schema_version")]
    pub version: String,
    #[doc = "Computer name"]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer_name: Option<String>,
    #[doc = "Rig name"]
    pub rig_name: String,
    pub treadmill: Treadmill,
}
impl Default for TreadmillCalibrationRig {
    fn default() -> Self {
        Self {
            aind_behavior_services_pkg_version: defaults::pkg_version(),
            version: defaults::rig_schema_version(),
            computer_name: None,
            rig_name: String::new(),
            treadmill: Treadmill::default(),
        }
    }
}

mod defaults {
    use super::*;

    pub(super) fn wheel_diameter() -> f64 {
        15.0
    }
    pub(super) fn pulses_per_revolution() -> i64 {
        28800
    }
    pub(super) fn device_name() -> String {
        "Treadmill".to_string()
    }
    pub(super) fn description() -> String {
        "Calibration of the treadmill system".to_string()
    }
    pub(super) fn device_type() -> HarpDeviceType {
        HarpDeviceType::Treadmill
    }
    pub(super) fn who_am_i() -> i64 {
        who_am_i::TREADMILL
    }
    pub(super) fn pkg_version() -> String {
        PKG_VERSION.to_string()
    }
    pub(super) fn rig_schema_version() -> String {
        RIG_SCHEMA_VERSION.to_string()
    }
}
