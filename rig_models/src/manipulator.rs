// Types from aind_manipulator_calibration.json and aind_manipulator_calibration_rig.json

use serde::{Deserialize, Serialize};

use crate::harp::{who_am_i, HarpDeviceType};
use crate::{integer_enum, Timestamp};

pub const LOGIC_VERSION: &str = "0.2.0";
pub const RIG_SCHEMA_VERSION: &str = "0.0.0";
pub const PKG_VERSION: &str = "0.10.2";
pub const RIG_DESCRIBED_BY: &str = "https://raw.githubusercontent.com/AllenNeuralDynamics/Aind.Behavior.Services/main/src/DataSchemas/schemas/aind_manipulator_calibration_rig.json";

#[doc = "Motor axis available"]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Axis {
    None,
    Y1,
    Y2,
    X,
    Z,
}
integer_enum!(Axis {
    None = 0,
    Y1 = 1,
    Y2 = 2,
    X = 3,
    Z = 4,
});

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum MicrostepResolution {
    #[default]
    Microstep8,
    Microstep16,
    Microstep32,
    Microstep64,
}
integer_enum!(MicrostepResolution {
    Microstep8 = 0,
    Microstep16 = 1,
    Microstep32 = 2,
    Microstep64 = 3,
});

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum MotorOperationMode {
    #[default]
    Quiet,
    Dynamic,
}
integer_enum!(MotorOperationMode {
    Quiet = 0,
    Dynamic = 1,
});

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ManipulatorPosition {
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
    pub z: f64,
}

#[doc = "Axis configuration"]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AxisConfiguration {
    #[doc = "Axis to be configured"]
    pub axis: Axis,
    #[doc = "Acceleration of the step interval in microseconds"]
    #[serde(default = "defaults::step_acceleration_interval")]
    pub step_acceleration_interval: i64,
    #[doc = "Step interval in microseconds."]
    #[serde(default = "defaults::step_interval")]
    pub step_interval: i64,
    #[serde(default)]
    pub microstep_resolution: MicrostepResolution,
    #[doc = "Configures the time between step motor pulses (us) used when starting or stopping a movement"]
    #[serde(default = "defaults::maximum_step_interval")]
    pub maximum_step_interval: i64,
    #[serde(default)]
    pub motor_operation_mode: MotorOperationMode,
    #[doc = "Maximum limit. A value of 0 disables this limit."]
    #[serde(default = "defaults::max_limit")]
    pub max_limit: i64,
    #[doc = "Minimum limit. A value of 0 disables this limit."]
    #[serde(default = "defaults::min_limit")]
    pub min_limit: i64,
}
impl AxisConfiguration {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            step_acceleration_interval: defaults::step_acceleration_interval(),
            step_interval: defaults::step_interval(),
            microstep_resolution: MicrostepResolution::default(),
            maximum_step_interval: defaults::maximum_step_interval(),
            motor_operation_mode: MotorOperationMode::default(),
            max_limit: defaults::max_limit(),
            min_limit: defaults::min_limit(),
        }
    }
}
impl Default for AxisConfiguration {
    fn default() -> Self {
        Self::new(Axis::None)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ManipulatorCalibrationInput {
    #[serde(default = "defaults::full_step_to_mm")]
    pub full_step_to_mm: ManipulatorPosition,
    #[doc = "Axes configuration. Only the axes that are configured will be enabled."]
    #[serde(default = "defaults::axis_configuration")]
    pub axis_configuration: Vec<AxisConfiguration>,
    #[serde(default = "defaults::homing_order")]
    pub homing_order: Vec<Axis>,
    #[serde(default)]
    pub initial_position: ManipulatorPosition,
}
impl Default for ManipulatorCalibrationInput {
    fn default() -> Self {
        Self {
            full_step_to_mm: defaults::full_step_to_mm(),
            axis_configuration: defaults::axis_configuration(),
            homing_order: defaults::homing_order(),
            initial_position: ManipulatorPosition::default(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ManipulatorCalibrationOutput {}

#[doc = "Aind manipulator calibration class"]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ManipulatorCalibration {
    #[doc = "Must match a device name in rig/instrument"]
    #[serde(default = "defaults::device_name")]
    pub device_name: String,
    pub input: ManipulatorCalibrationInput,
    pub output: ManipulatorCalibrationOutput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(default = "defaults::description")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
impl Default for ManipulatorCalibration {
    fn default() -> Self {
        Self {
            device_name: defaults::device_name(),
            input: ManipulatorCalibrationInput::default(),
            output: ManipulatorCalibrationOutput::default(),
            date: None,
            description: defaults::description(),
            notes: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ManipulatorCalibrationParameters {
    #[doc = "Seed of the random number generator"]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<f64>,
    #[serde(default = "defaults::pkg_version")]
    pub aind_behavior_services_pkg_version: String,
}
impl Default for ManipulatorCalibrationParameters {
    fn default() -> Self {
        Self {
            rng_seed: None,
            aind_behavior_services_pkg_version: defaults::pkg_version(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ManipulatorCalibrationLogic {
    #[serde(default = "defaults::logic_name")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub task_parameters: ManipulatorCalibrationParameters,
    #[serde(default = "defaults::logic_version")]
    pub version: String,
    #[doc = "Optional stage name the `Task` object instance represents."]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_name: Option<String>,
}
impl Default for ManipulatorCalibrationLogic {
    fn default() -> Self {
        Self {
            name: defaults::logic_name(),
            description: String::new(),
            task_parameters: ManipulatorCalibrationParameters::default(),
            version: defaults::logic_version(),
            stage_name: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ManipulatorDevice {
    #[serde(default = "defaults::device_type")]
    pub device_type: HarpDeviceType,
    #[serde(default = "defaults::who_am_i")]
    pub who_am_i: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    pub port_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_settings: Option<serde_json::Value>,
    pub calibration: ManipulatorCalibration,
}
impl Default for ManipulatorDevice {
    fn default() -> Self {
        Self {
            device_type: defaults::device_type(),
            who_am_i: defaults::who_am_i(),
            serial_number: None,
            port_name: String::new(),
            additional_settings: None,
            calibration: ManipulatorCalibration::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ManipulatorCalibrationRig {
    #[serde(rename = "describedBy", default = "defaults::rig_described_by")]
    pub described_by: String,
    #[serde(default = "defaults::pkg_version")]
    pub aind_behavior_services_pkg_version: String,
    #[serde(default = "defaults::rig_schema_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer_name: Option<String>,
    pub rig_name: String,
    pub manipulator: ManipulatorDevice,
}
impl Default for ManipulatorCalibrationRig {
    fn default() -> Self {
        Self {
            described_by: defaults::rig_described_by(),
            aind_behavior_services_pkg_version: defaults::pkg_version(),
            version: defaults::rig_schema_version(),
            computer_name: None,
            rig_name: String::new(),
            manipulator: ManipulatorDevice::default(),
        }
    }
}

mod defaults {
    use super::*;

    pub(super) fn step_acceleration_interval() -> i64 {
        100
    }
    pub(super) fn step_interval() -> i64 {
        100
    }
    pub(super) fn maximum_step_interval() -> i64 {
        2000
    }
    pub(super) fn max_limit() -> i64 {
        24000
    }
    pub(super) fn min_limit() -> i64 {
        -1
    }
    pub(super) fn full_step_to_mm() -> ManipulatorPosition {
        ManipulatorPosition {
            x: 0.010,
            y1: 0.010,
            y2: 0.010,
            z: 0.010,
        }
    }
    pub(super) fn homing_order() -> Vec<Axis> {
        vec![Axis::Y1, Axis::Y2, Axis::X, Axis::Z]
    }
    pub(super) fn axis_configuration() -> Vec<AxisConfiguration> {
        homing_order().into_iter().map(AxisConfiguration::new).collect()
    }
    pub(super) fn device_name() -> String {
        "AindManipulator".to_string()
    }
    // The published schema reuses the load cells wording here.
    pub(super) fn description() -> String {
        "Calibration of the load cells system".to_string()
    }
    pub(super) fn logic_name() -> String {
        "AindManipulatorCalibrationLogic".to_string()
    }
    pub(super) fn logic_version() -> String {
        LOGIC_VERSION.to_string()
    }
    pub(super) fn pkg_version() -> String {
        PKG_VERSION.to_string()
    }
    pub(super) fn rig_schema_version() -> String {
        RIG_SCHEMA_VERSION.to_string()
    }
    pub(super) fn rig_described_by() -> String {
        RIG_DESCRIBED_BY.to_string()
    }
    pub(super) fn device_type() -> HarpDeviceType {
        HarpDeviceType::StepperDriver
    }
    pub(super) fn who_am_i() -> i64 {
        who_am_i::STEPPER_DRIVER
    }
}
