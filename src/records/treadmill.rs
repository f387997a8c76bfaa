pub use rig_models::treadmill::{
    Treadmill, TreadmillCalibration, TreadmillCalibrationInput, TreadmillCalibrationOutput,
    TreadmillCalibrationRig, PKG_VERSION, RIG_SCHEMA_VERSION,
};

use super::harp::DEVICE_TYPE;
use crate::model::{ConfigRecord, Field, FieldKind, Versioned};

const BRAKE_PAIR: FieldKind = FieldKind::Pair(&FieldKind::Number);
const CALIBRATION: FieldKind = TreadmillCalibration::KIND;

impl ConfigRecord for TreadmillCalibrationInput {
    const TITLE: &'static str = "TreadmillCalibrationInput";
    const FIELDS: &'static [Field] = &[];
}

impl ConfigRecord for TreadmillCalibrationOutput {
    const TITLE: &'static str = "TreadmillCalibrationOutput";
    const FIELDS: &'static [Field] = &[
        Field::optional("wheel_diameter", FieldKind::Number).describe("Wheel diameter"),
        Field::optional("pulses_per_revolution", FieldKind::Integer)
            .describe("Pulses per revolution"),
        Field::optional("invert_direction", FieldKind::Boolean).describe("Invert direction"),
        Field::required("brake_lookup_calibration", FieldKind::List(&BRAKE_PAIR)).describe(
            "Brake lookup calibration. Each pair of values define (input [torque], output [brake set-point U16])",
        ),
    ];
}

impl ConfigRecord for TreadmillCalibration {
    const TITLE: &'static str = "TreadmillCalibration";
    const FIELDS: &'static [Field] = &[
        Field::optional("device_name", FieldKind::String)
            .describe("Must match a device name in rig/instrument"),
        Field::required("input", TreadmillCalibrationInput::KIND),
        Field::required("output", TreadmillCalibrationOutput::KIND),
        Field::nullable("date", FieldKind::DateTime),
        Field::optional("description", FieldKind::String),
        Field::nullable("notes", FieldKind::String),
    ];
}

impl ConfigRecord for Treadmill {
    const TITLE: &'static str = "Treadmill";
    const FIELDS: &'static [Field] = &[
        Field::optional("device_type", DEVICE_TYPE),
        Field::nullable("additional_settings", FieldKind::Any).describe("Additional settings"),
        Field::nullable("calibration", CALIBRATION),
        Field::optional("who_am_i", FieldKind::Integer),
        Field::nullable("serial_number", FieldKind::String).describe("Device serial number"),
        Field::required("port_name", FieldKind::String).describe("Device port name"),
    ];
}

impl ConfigRecord for TreadmillCalibrationRig {
    const TITLE: &'static str = "TreadmillCalibrationRig";
    const FIELDS: &'static [Field] = &[
        Field::optional("aind_behavior_services_pkg_version", FieldKind::String),
        Field::optional("version", FieldKind::String),
        Field::nullable("computer_name", FieldKind::String).describe("Computer name"),
        Field::required("rig_name", FieldKind::String).describe("Rig name"),
        Field::required("treadmill", Treadmill::KIND),
    ];
}

impl Versioned for TreadmillCalibrationRig {
    const CURRENT_VERSION: &'static str = RIG_SCHEMA_VERSION;

    fn version(&self) -> &str {
        &self.version
    }

    fn set_version(&mut self, version: String) {
        self.version = version;
    }
}
