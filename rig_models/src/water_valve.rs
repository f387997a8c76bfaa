// Types from water_valve_calibration.json

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Timestamp;

pub const SCHEMA_VERSION: &str = "0.3.0";
pub const DESCRIBED_BY: &str = "https://raw.githubusercontent.com/AllenNeuralDynamics/Aind.Behavior.Services/main/src/DataSchemas/schemas/water_valve_calibration.json";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct WaterValveCalibrationLogic {
    #[serde(rename = "describedBy", default = "defaults::described_by")]
    pub described_by: String,
    #[serde(default = "defaults::schema_version")]
    pub schema_version: String,
    #[doc = "An array with the times (s) the valve is open during calibration"]
    pub valve_open_time: Vec<f64>,
    #[doc = "Time between two consecutive valve openings (s)"]
    #[serde(default = "defaults::valve_open_interval")]
    pub valve_open_interval: f64,
    #[doc = "Number of times the valve opened per measure valve_open_time entry"]
    #[serde(default = "defaults::repeat_count")]
    pub repeat_count: i64,
}
impl Default for WaterValveCalibrationLogic {
    fn default() -> Self {
        Self {
            described_by: defaults::described_by(),
            schema_version: defaults::schema_version(),
            valve_open_time: Vec::new(),
            valve_open_interval: defaults::valve_open_interval(),
            repeat_count: defaults::repeat_count(),
        }
    }
}

#[doc = "Input for water valve calibration class"]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Measurement {
    #[doc = "Time between two consecutive valve openings (s)"]
    pub valve_open_interval: f64,
    #[doc = "Valve open interval (s)"]
    pub valve_open_time: f64,
    #[doc = "Weight of water delivered (g)"]
    pub water_weight: Vec<f64>,
    #[doc = "Number of times the valve opened."]
    pub repeat_count: i64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct WaterValveCalibrationInput {
    #[doc = "List of measurements"]
    #[serde(default)]
    pub measurements: Vec<Measurement>,
}

#[doc = "Output for water valve calibration class"]
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct WaterValveCalibrationOutput {
    #[doc = "Dictionary keyed by measured valve interval and corresponding average single event volume."]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_average: Option<BTreeMap<String, f64>>,
    #[doc = "Slope of the linear regression : Volume(g) = Slope(g/s) * time(s) + offset(g)"]
    pub slope: f64,
    #[doc = "Offset of the linear regression : Volume(g) = Slope(g/s) * time(s) + offset(g)"]
    pub offset: f64,
    #[doc = "R2 metric from the linear model."]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r2: Option<f64>,
    #[doc = "The optional time-intervals the calibration curve was calculated on."]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_domain: Option<Vec<f64>>,
}

#[doc = "Water valve calibration class"]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct WaterValveCalibration {
    #[doc = "Must match a device name in rig/instrument"]
    #[serde(default = "defaults::device_name")]
    pub device_name: String,
    pub input: WaterValveCalibrationInput,
    pub output: WaterValveCalibrationOutput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(default = "defaults::description")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
impl Default for WaterValveCalibration {
    fn default() -> Self {
        Self {
            device_name: defaults::device_name(),
            input: WaterValveCalibrationInput::default(),
            output: WaterValveCalibrationOutput::default(),
            date: None,
            description: defaults::description(),
            notes: None,
        }
    }
}

mod defaults {
    pub(super) fn described_by() -> String {
        super::DESCRIBED_BY.to_string()
    }
    pub(super) fn schema_version() -> String {
        super::SCHEMA_VERSION.to_string()
    }
    pub(super) fn valve_open_interval() -> f64 {
        0.2
    }
    pub(super) fn repeat_count() -> i64 {
        200
    }
    pub(super) fn device_name() -> String {
        "WaterValve".to_string()
    }
    pub(super) fn description() -> String {
        "Calibration of the water valve delivery system".to_string()
    }
}
