//! Olfactometer calibration records
//!
//! `OlfactometerCalibrationLogic` is what the acquisition workflow receives;
//! `OlfactometerCalibrationRig` describes the hardware it runs on.

pub use rig_models::olfactometer::{
    FlowRateCapacity, HarpAnalogInput, HarpClockGenerator, Olfactometer, OlfactometerCalibration,
    OlfactometerCalibrationInput, OlfactometerCalibrationLogic, OlfactometerCalibrationOutput,
    OlfactometerCalibrationRig, OlfactometerChannel, OlfactometerChannelConfig,
    OlfactometerChannelType, LOGIC_SCHEMA_VERSION, PKG_VERSION, RIG_SCHEMA_VERSION,
};

use super::harp::DEVICE_TYPE;
use crate::model::{ConfigRecord, EnumValue, Field, FieldKind, Versioned, WireEnum};

impl WireEnum for OlfactometerChannelType {
    const VALUES: &'static [EnumValue] = &[EnumValue::Str("Odor"), EnumValue::Str("Carrier")];
}

impl WireEnum for FlowRateCapacity {
    const VALUES: &'static [EnumValue] = &[EnumValue::Int(100), EnumValue::Int(1000)];
}

const CHANNEL_CONFIG: FieldKind = OlfactometerChannelConfig::KIND;

impl ConfigRecord for OlfactometerChannelConfig {
    const TITLE: &'static str = "OlfactometerChannelConfig";
    const FIELDS: &'static [Field] = &[
        Field::required("channel_index", FieldKind::Integer).describe("Channel index"),
        Field::optional("channel_type", FieldKind::Enum(OlfactometerChannelType::VALUES))
            .describe("Channel type"),
        Field::optional("flow_rate_capacity", FieldKind::Enum(FlowRateCapacity::VALUES))
            .describe("Flow capacity. mL/min"),
        Field::optional("flow_rate", FieldKind::Number).describe(
            "Target flow rate. mL/min. If channel_type == CARRIER, this value is ignored.",
        ),
        Field::nullable("odorant", FieldKind::String).describe("Odorant name"),
        Field::nullable("odorant_dilution", FieldKind::Number)
            .describe("Odorant dilution (%v/v)"),
    ];
}

impl ConfigRecord for OlfactometerCalibrationLogic {
    const TITLE: &'static str = "CalibrationLogic";
    const FIELDS: &'static [Field] = &[
        Field::optional("schema_version", FieldKind::String),
        Field::optional("channel_config", FieldKind::Map(&CHANNEL_CONFIG))
            .describe("Configuration of olfactometer channels"),
        Field::optional("full_flow_rate", FieldKind::Number)
            .describe("Full flow rate of the olfactometer"),
        Field::optional("n_repeats_per_stimulus", FieldKind::Integer)
            .describe("Number of repeats per stimulus"),
        Field::optional("time_on", FieldKind::Number)
            .describe("Time (s) the valve is open during calibration"),
        Field::optional("time_off", FieldKind::Number)
            .describe("Time (s) the valve is close during calibration"),
    ];
}

impl Versioned for OlfactometerCalibrationLogic {
    const CURRENT_VERSION: &'static str = LOGIC_SCHEMA_VERSION;

    fn version(&self) -> &str {
        &self.schema_version
    }

    fn set_version(&mut self, version: String) {
        self.schema_version = version;
    }
}

impl ConfigRecord for OlfactometerCalibrationInput {
    const TITLE: &'static str = "OlfactometerCalibrationInput";
    const FIELDS: &'static [Field] = &[];
}

impl ConfigRecord for OlfactometerCalibrationOutput {
    const TITLE: &'static str = "OlfactometerCalibrationOutput";
    const FIELDS: &'static [Field] = &[];
}

impl ConfigRecord for OlfactometerCalibration {
    const TITLE: &'static str = "OlfactometerCalibration";
    const FIELDS: &'static [Field] = &[
        Field::optional("device_name", FieldKind::String)
            .describe("Name of the device being calibrated"),
        Field::required("input", OlfactometerCalibrationInput::KIND),
        Field::required("output", OlfactometerCalibrationOutput::KIND),
        Field::nullable("date", FieldKind::DateTime),
        Field::optional("description", FieldKind::String),
        Field::nullable("notes", FieldKind::String),
    ];
}

impl ConfigRecord for Olfactometer {
    const TITLE: &'static str = "Olfactometer";
    const FIELDS: &'static [Field] = &[
        Field::optional("device_type", DEVICE_TYPE),
        Field::optional("who_am_i", FieldKind::Integer),
        Field::nullable("serial_number", FieldKind::String).describe("Device serial number"),
        Field::required("port_name", FieldKind::String).describe("Device port name"),
        Field::nullable("additional_settings", FieldKind::Any).describe("Additional settings"),
        Field::required("calibration", OlfactometerCalibration::KIND)
            .describe("Calibration of the olfactometer"),
    ];
}

impl ConfigRecord for HarpAnalogInput {
    const TITLE: &'static str = "HarpAnalogInput";
    const FIELDS: &'static [Field] = &[
        Field::optional("device_type", DEVICE_TYPE),
        Field::optional("who_am_i", FieldKind::Integer),
        Field::nullable("serial_number", FieldKind::String),
        Field::required("port_name", FieldKind::String),
        Field::nullable("additional_settings", FieldKind::Any),
    ];
}

impl ConfigRecord for HarpClockGenerator {
    const TITLE: &'static str = "HarpClockGenerator";
    const FIELDS: &'static [Field] = &[
        Field::optional("device_type", DEVICE_TYPE),
        Field::optional("who_am_i", FieldKind::Integer),
        Field::nullable("serial_number", FieldKind::String),
        Field::required("port_name", FieldKind::String),
        Field::nullable("additional_settings", FieldKind::Any),
    ];
}

impl ConfigRecord for OlfactometerCalibrationRig {
    const TITLE: &'static str = "CalibrationRig";
    const FIELDS: &'static [Field] = &[
        Field::optional("aind_behavior_services_pkg_version", FieldKind::String),
        Field::optional("version", FieldKind::String),
        Field::nullable("computer_name", FieldKind::String).describe("Computer name"),
        Field::required("rig_name", FieldKind::String).describe("Rig name"),
        Field::required("harp_olfactometer", Olfactometer::KIND).describe("Olfactometer device"),
        Field::required("harp_analog_input", HarpAnalogInput::KIND)
            .describe("Analog input device"),
        Field::required("harp_clock_generator", HarpClockGenerator::KIND)
            .describe("Clock generator device"),
    ];
}

impl Versioned for OlfactometerCalibrationRig {
    const CURRENT_VERSION: &'static str = RIG_SCHEMA_VERSION;

    fn version(&self) -> &str {
        &self.version
    }

    fn set_version(&mut self, version: String) {
        self.version = version;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{decode, DecodeError};
    use crate::records::assert_descriptor_matches;

    #[test]
    fn descriptors_match_serde_shape() {
        assert_descriptor_matches::<OlfactometerChannelConfig>();
        assert_descriptor_matches::<OlfactometerCalibrationLogic>();
        assert_descriptor_matches::<OlfactometerCalibration>();
        assert_descriptor_matches::<Olfactometer>();
        assert_descriptor_matches::<HarpAnalogInput>();
        assert_descriptor_matches::<HarpClockGenerator>();
        assert_descriptor_matches::<OlfactometerCalibrationRig>();
    }

    #[test]
    fn channel_config_errors_carry_map_key() {
        let err = decode::<OlfactometerCalibrationLogic>(
            r#"{"channel_config": {"1": {"channel_index": 1, "channel_type": "Vacuum"}}}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidEnumValue {
                field: "channel_config.1.channel_type".into(),
                raw: serde_json::json!("Vacuum"),
            }
        );
    }

    #[test]
    fn rig_requires_nested_port_name() {
        let err = decode::<OlfactometerCalibrationRig>(
            r#"{
                "rig_name": "olfactometer-rig",
                "harp_olfactometer": {"calibration": {"input": {}, "output": {}}},
                "harp_analog_input": {"port_name": "COM4"},
                "harp_clock_generator": {"port_name": "COM5"}
            }"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingRequiredField("harp_olfactometer.port_name".into())
        );
    }
}
