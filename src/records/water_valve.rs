pub use rig_models::water_valve::{
    Measurement, WaterValveCalibration, WaterValveCalibrationInput, WaterValveCalibrationLogic,
    WaterValveCalibrationOutput, DESCRIBED_BY, SCHEMA_VERSION,
};

use crate::model::{ConfigRecord, Field, FieldKind, Versioned};

const MEASUREMENT: FieldKind = Measurement::KIND;

impl ConfigRecord for WaterValveCalibrationLogic {
    const TITLE: &'static str = "WaterValveCalibrationLogic";
    const FIELDS: &'static [Field] = &[
        Field::optional("describedBy", FieldKind::String),
        Field::optional("schema_version", FieldKind::String),
        Field::required("valve_open_time", FieldKind::List(&FieldKind::Number))
            .describe("An array with the times (s) the valve is open during calibration"),
        Field::optional("valve_open_interval", FieldKind::Number)
            .describe("Time between two consecutive valve openings (s)"),
        Field::optional("repeat_count", FieldKind::Integer)
            .describe("Number of times the valve opened per measure valve_open_time entry"),
    ];
}

impl Versioned for WaterValveCalibrationLogic {
    const CURRENT_VERSION: &'static str = SCHEMA_VERSION;

    fn version(&self) -> &str {
        &self.schema_version
    }

    fn set_version(&mut self, version: String) {
        self.schema_version = version;
    }
}

impl ConfigRecord for Measurement {
    const TITLE: &'static str = "Measurement";
    const FIELDS: &'static [Field] = &[
        Field::required("valve_open_interval", FieldKind::Number)
            .describe("Time between two consecutive valve openings (s)"),
        Field::required("valve_open_time", FieldKind::Number).describe("Valve open interval (s)"),
        Field::required("water_weight", FieldKind::List(&FieldKind::Number))
            .describe("Weight of water delivered (g)"),
        Field::required("repeat_count", FieldKind::Integer)
            .describe("Number of times the valve opened."),
    ];
}

impl ConfigRecord for WaterValveCalibrationInput {
    const TITLE: &'static str = "WaterValveCalibrationInput";
    const FIELDS: &'static [Field] = &[
        Field::optional("measurements", FieldKind::List(&MEASUREMENT))
            .describe("List of measurements"),
    ];
}

impl ConfigRecord for WaterValveCalibrationOutput {
    const TITLE: &'static str = "WaterValveCalibrationOutput";
    const FIELDS: &'static [Field] = &[
        Field::nullable("interval_average", FieldKind::Map(&FieldKind::Number)).describe(
            "Dictionary keyed by measured valve interval and corresponding average single event volume.",
        ),
        Field::required("slope", FieldKind::Number).describe(
            "Slope of the linear regression : Volume(g) = Slope(g/s) * time(s) + offset(g)",
        ),
        Field::required("offset", FieldKind::Number).describe(
            "Offset of the linear regression : Volume(g) = Slope(g/s) * time(s) + offset(g)",
        ),
        Field::nullable("r2", FieldKind::Number).describe("R2 metric from the linear model."),
        Field::nullable("valid_domain", FieldKind::List(&FieldKind::Number))
            .describe("The optional time-intervals the calibration curve was calculated on."),
    ];
}

impl ConfigRecord for WaterValveCalibration {
    const TITLE: &'static str = "WaterValveCalibration";
    const FIELDS: &'static [Field] = &[
        Field::optional("device_name", FieldKind::String)
            .describe("Must match a device name in rig/instrument"),
        Field::required("input", WaterValveCalibrationInput::KIND),
        Field::required("output", WaterValveCalibrationOutput::KIND),
        Field::nullable("date", FieldKind::DateTime),
        Field::optional("description", FieldKind::String),
        Field::nullable("notes", FieldKind::String),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{decode, DecodeError};
    use crate::records::assert_descriptor_matches;

    #[test]
    fn descriptors_match_serde_shape() {
        assert_descriptor_matches::<WaterValveCalibrationLogic>();
        assert_descriptor_matches::<Measurement>();
        assert_descriptor_matches::<WaterValveCalibrationInput>();
        assert_descriptor_matches::<WaterValveCalibrationOutput>();
        assert_descriptor_matches::<WaterValveCalibration>();
    }

    #[test]
    fn measurement_errors_carry_list_index() {
        let err = decode::<WaterValveCalibration>(
            r#"{
                "input": {"measurements": [
                    {"valve_open_interval": 0.2, "valve_open_time": 0.01, "water_weight": [0.5], "repeat_count": 200},
                    {"valve_open_interval": 0.2, "valve_open_time": 0.02, "repeat_count": 200}
                ]},
                "output": {"slope": 1.0, "offset": 0.0}
            }"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingRequiredField("input.measurements[1].water_weight".into())
        );
    }

    #[test]
    fn water_weight_must_be_numbers() {
        let err = decode::<Measurement>(
            r#"{"valve_open_interval": 0.2, "valve_open_time": 0.01, "water_weight": [0.5, "heavy"], "repeat_count": 1}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                field: "water_weight[1]".into(),
                expected: "number",
                actual: "string",
            }
        );
    }
}
