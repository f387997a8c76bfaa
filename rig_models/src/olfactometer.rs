// Types from olfactometer_calibration_logic.json and olfactometer_calibration_rig.json

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::harp::{who_am_i, HarpDeviceType};
use crate::{integer_enum, Timestamp};

pub const LOGIC_SCHEMA_VERSION: &str = "0.3.0";
pub const RIG_SCHEMA_VERSION: &str = "0.0.0";
pub const PKG_VERSION: &str = "0.8.9";

#[doc = "Harp Olfactometer available channel"]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum OlfactometerChannel {
    Channel0,
    Channel1,
    Channel2,
    Channel3,
}
integer_enum!(OlfactometerChannel {
    Channel0 = 0,
    Channel1 = 1,
    Channel2 = 2,
    Channel3 = 3,
});

impl OlfactometerChannel {
    pub const ALL: [OlfactometerChannel; 4] =
        [Self::Channel0, Self::Channel1, Self::Channel2, Self::Channel3];

    /// Key under which this channel is stored in `channel_config`.
    pub fn key(self) -> String {
        self.value().to_string()
    }
}

#[doc = "Channel type"]
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum OlfactometerChannelType {
    Odor,
    Carrier,
}
impl Default for OlfactometerChannelType {
    fn default() -> Self {
        OlfactometerChannelType::Odor
    }
}
impl std::fmt::Display for OlfactometerChannelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Odor => f.write_str("Odor"),
            Self::Carrier => f.write_str("Carrier"),
        }
    }
}

#[doc = "Flow capacity. mL/min"]
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum FlowRateCapacity {
    _100,
    _1000,
}
integer_enum!(FlowRateCapacity {
    _100 = 100,
    _1000 = 1000,
});
impl Default for FlowRateCapacity {
    fn default() -> Self {
        FlowRateCapacity::_100
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OlfactometerChannelConfig {
    pub channel_index: i64,
    #[serde(default)]
    pub channel_type: OlfactometerChannelType,
    #[serde(default)]
    pub flow_rate_capacity: FlowRateCapacity,
    #[doc = "Target flow rate. mL/min. If channel_type == CARRIER, this value is ignored."]
    #[serde(default = "defaults::flow_rate")]
    pub flow_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odorant: Option<String>,
    #[doc = "Odorant dilution (%v/v)"]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odorant_dilution: Option<f64>,
}
impl Default for OlfactometerChannelConfig {
    fn default() -> Self {
        Self {
            channel_index: 0,
            channel_type: OlfactometerChannelType::default(),
            flow_rate_capacity: FlowRateCapacity::default(),
            flow_rate: defaults::flow_rate(),
            odorant: None,
            odorant_dilution: None,
        }
    }
}

#[doc = "Olfactometer operation control model that is used to run a calibration data acquisition workflow"]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OlfactometerCalibrationLogic {
    #[serde(default = "defaults::logic_schema_version")]
    pub schema_version: String,
    #[doc = "Configuration of olfactometer channels"]
    #[serde(default)]
    pub channel_config: BTreeMap<String, OlfactometerChannelConfig>,
    #[doc = "Full flow rate of the olfactometer"]
    #[serde(default = "defaults::full_flow_rate")]
    pub full_flow_rate: f64,
    #[doc = "Number of repeats per stimulus"]
    #[serde(default = "defaults::n_repeats_per_stimulus")]
    pub n_repeats_per_stimulus: i64,
    #[doc = "Time (s) the valve is open during calibration"]
    #[serde(default = "defaults::time_on")]
    pub time_on: f64,
    #[doc = "Time (s) the valve is close during calibration"]
    #[serde(default = "defaults::time_off")]
    pub time_off: f64,
}
impl Default for OlfactometerCalibrationLogic {
    fn default() -> Self {
        Self {
            schema_version: defaults::logic_schema_version(),
            channel_config: BTreeMap::new(),
            full_flow_rate: defaults::full_flow_rate(),
            n_repeats_per_stimulus: defaults::n_repeats_per_stimulus(),
            time_on: defaults::time_on(),
            time_off: defaults::time_off(),
        }
    }
}
impl OlfactometerCalibrationLogic {
    pub fn channel(&self, channel: OlfactometerChannel) -> Option<&OlfactometerChannelConfig> {
        self.channel_config.get(&channel.key())
    }

    /// Stores `config` under the key of `channel`, keeping `channel_index` in step.
    pub fn set_channel(&mut self, channel: OlfactometerChannel, mut config: OlfactometerChannelConfig) {
        config.channel_index = channel.value();
        self.channel_config.insert(channel.key(), config);
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct OlfactometerCalibrationInput {}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct OlfactometerCalibrationOutput {}

#[doc = "Olfactometer calibration class"]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OlfactometerCalibration {
    #[doc = "Name of the device being calibrated"]
    #[serde(default = "defaults::calibration_device_name")]
    pub device_name: String,
    pub input: OlfactometerCalibrationInput,
    pub output: OlfactometerCalibrationOutput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(default = "defaults::calibration_description")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
impl Default for OlfactometerCalibration {
    fn default() -> Self {
        Self {
            device_name: defaults::calibration_device_name(),
            input: OlfactometerCalibrationInput::default(),
            output: OlfactometerCalibrationOutput::default(),
            date: None,
            description: defaults::calibration_description(),
            notes: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Olfactometer {
    #[serde(default = "defaults::olfactometer_device_type")]
    pub device_type: HarpDeviceType,
    #[serde(default = "defaults::olfactometer_who_am_i")]
    pub who_am_i: i64,
    #[doc = "Device serial number"]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[doc = "Device port name"]
    pub port_name: String,
    #[doc = "Additional settings"]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_settings: Option<serde_json::Value>,
    pub calibration: OlfactometerCalibration,
}
impl Default for Olfactometer {
    fn default() -> Self {
        Self {
            device_type: defaults::olfactometer_device_type(),
            who_am_i: defaults::olfactometer_who_am_i(),
            serial_number: None,
            port_name: String::new(),
            additional_settings: None,
            calibration: OlfactometerCalibration::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct HarpAnalogInput {
    #[serde(default = "defaults::analog_input_device_type")]
    pub device_type: HarpDeviceType,
    #[serde(default = "defaults::analog_input_who_am_i")]
    pub who_am_i: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    pub port_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_settings: Option<serde_json::Value>,
}
impl Default for HarpAnalogInput {
    fn default() -> Self {
        Self {
            device_type: defaults::analog_input_device_type(),
            who_am_i: defaults::analog_input_who_am_i(),
            serial_number: None,
            port_name: String::new(),
            additional_settings: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct HarpClockGenerator {
    #[serde(default = "defaults::clock_generator_device_type")]
    pub device_type: HarpDeviceType,
    #[serde(default = "defaults::clock_generator_who_am_i")]
    pub who_am_i: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    pub port_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_settings: Option<serde_json::Value>,
}
impl Default for HarpClockGenerator {
    fn default() -> Self {
        Self {
            device_type: defaults::clock_generator_device_type(),
            who_am_i: defaults::clock_generator_who_am_i(),
            serial_number: None,
            port_name: String::new(),
            additional_settings: None,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OlfactometerCalibrationRig {
    #[serde(default = "defaults::pkg_version")]
    pub aind_behavior_services_pkg_version: String,
    #[serde(default = "defaults::rig_schema_version")]
    pub version: String,
    #[doc = "Computer name"]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer_name: Option<String>,
    #[doc = "Rig name"]
    pub rig_name: String,
    pub harp_olfactometer: Olfactometer,
    pub harp_analog_input: HarpAnalogInput,
    pub harp_clock_generator: HarpClockGenerator,
}
impl Default for OlfactometerCalibrationRig {
    fn default() -> Self {
        Self {
            aind_behavior_services_pkg_version: defaults::pkg_version(),
            version: defaults::rig_schema_version(),
            computer_name: None,
            rig_name: String::new(),
            harp_olfactometer: Olfactometer::default(),
            harp_analog_input: HarpAnalogInput::default(),
            harp_clock_generator: HarpClockGenerator::default(),
        }
    }
}

mod defaults {
    use super::*;

    pub(super) fn flow_rate() -> f64 {
        100.0
    }
    pub(super) fn full_flow_rate() -> f64 {
        1000.0
    }
    pub(super) fn n_repeats_per_stimulus() -> i64 {
        1
    }
    pub(super) fn time_on() -> f64 {
        1.0
    }
    pub(super) fn time_off() -> f64 {
        1.0
    }
    pub(super) fn logic_schema_version() -> String {
        LOGIC_SCHEMA_VERSION.to_string()
    }
    pub(super) fn rig_schema_version() -> String {
        RIG_SCHEMA_VERSION.to_string()
    }
    pub(super) fn pkg_version() -> String {
        PKG_VERSION.to_string()
    }
    pub(super) fn calibration_device_name() -> String {
        "Olfactometer".to_string()
    }
    pub(super) fn calibration_description() -> String {
        "Calibration of the harp olfactometer device".to_string()
    }
    pub(super) fn olfactometer_device_type() -> HarpDeviceType {
        HarpDeviceType::Olfactometer
    }
    pub(super) fn olfactometer_who_am_i() -> i64 {
        who_am_i::OLFACTOMETER
    }
    pub(super) fn analog_input_device_type() -> HarpDeviceType {
        HarpDeviceType::AnalogInput
    }
    pub(super) fn analog_input_who_am_i() -> i64 {
        who_am_i::ANALOG_INPUT
    }
    pub(super) fn clock_generator_device_type() -> HarpDeviceType {
        HarpDeviceType::ClockGenerator
    }
    pub(super) fn clock_generator_who_am_i() -> i64 {
        who_am_i::CLOCK_GENERATOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flow_rate_capacity_uses_integer_wire_values() {
        assert_eq!(serde_json::to_value(FlowRateCapacity::_1000).unwrap(), json!(1000));
        assert_eq!(
            serde_json::from_value::<FlowRateCapacity>(json!(1000)).unwrap(),
            FlowRateCapacity::_1000
        );
        assert_eq!(
            serde_json::from_value::<FlowRateCapacity>(json!(1000.0)).unwrap(),
            FlowRateCapacity::_1000
        );
        assert!(serde_json::from_value::<FlowRateCapacity>(json!(500)).is_err());
        assert!(serde_json::from_value::<FlowRateCapacity>(json!(100.5)).is_err());
        assert!(serde_json::from_value::<FlowRateCapacity>(json!("100")).is_err());
    }

    #[test]
    fn set_channel_aligns_channel_index() {
        let mut logic = OlfactometerCalibrationLogic::default();
        logic.set_channel(
            OlfactometerChannel::Channel2,
            OlfactometerChannelConfig {
                channel_index: 0,
                channel_type: OlfactometerChannelType::Carrier,
                ..Default::default()
            },
        );

        let stored = logic.channel(OlfactometerChannel::Channel2).unwrap();
        assert_eq!(stored.channel_index, 2);
        assert!(logic.channel_config.contains_key("2"));
        assert!(logic.channel(OlfactometerChannel::Channel0).is_none());
    }
}
