pub use rig_models::manipulator::{
    Axis, AxisConfiguration, ManipulatorCalibration, ManipulatorCalibrationInput,
    ManipulatorCalibrationLogic, ManipulatorCalibrationOutput, ManipulatorCalibrationParameters,
    ManipulatorCalibrationRig, ManipulatorDevice, ManipulatorPosition, MicrostepResolution,
    MotorOperationMode, LOGIC_VERSION, PKG_VERSION, RIG_DESCRIBED_BY, RIG_SCHEMA_VERSION,
};

use super::harp::DEVICE_TYPE;
use crate::model::{ConfigRecord, EnumValue, Field, FieldKind, Versioned, WireEnum};

impl WireEnum for Axis {
    const VALUES: &'static [EnumValue] = &[
        EnumValue::Int(0),
        EnumValue::Int(1),
        EnumValue::Int(2),
        EnumValue::Int(3),
        EnumValue::Int(4),
    ];
}

impl WireEnum for MicrostepResolution {
    const VALUES: &'static [EnumValue] = &[
        EnumValue::Int(0),
        EnumValue::Int(1),
        EnumValue::Int(2),
        EnumValue::Int(3),
    ];
}

impl WireEnum for MotorOperationMode {
    const VALUES: &'static [EnumValue] = &[EnumValue::Int(0), EnumValue::Int(1)];
}

const AXIS: FieldKind = FieldKind::Enum(Axis::VALUES);
const AXIS_CONFIGURATION: FieldKind = AxisConfiguration::KIND;

impl ConfigRecord for ManipulatorPosition {
    const TITLE: &'static str = "ManipulatorPosition";
    const FIELDS: &'static [Field] = &[
        Field::required("x", FieldKind::Number).describe("X coordinate"),
        Field::required("y1", FieldKind::Number).describe("Y1 coordinate"),
        Field::required("y2", FieldKind::Number).describe("Y2 coordinate"),
        Field::required("z", FieldKind::Number).describe("Z coordinate"),
    ];
}

impl ConfigRecord for AxisConfiguration {
    const TITLE: &'static str = "AxisConfiguration";
    const FIELDS: &'static [Field] = &[
        Field::required("axis", AXIS).describe("Axis to be configured"),
        Field::optional("step_acceleration_interval", FieldKind::Integer)
            .describe("Acceleration of the step interval in microseconds"),
        Field::optional("step_interval", FieldKind::Integer)
            .describe("Step interval in microseconds."),
        Field::optional(
            "microstep_resolution",
            FieldKind::Enum(MicrostepResolution::VALUES),
        ),
        Field::optional("maximum_step_interval", FieldKind::Integer).describe(
            "Configures the time between step motor pulses (us) used when starting or stopping a movement",
        ),
        Field::optional(
            "motor_operation_mode",
            FieldKind::Enum(MotorOperationMode::VALUES),
        ),
        Field::optional("max_limit", FieldKind::Integer)
            .describe("Maximum limit. A value of 0 disables this limit."),
        Field::optional("min_limit", FieldKind::Integer)
            .describe("Minimum limit. A value of 0 disables this limit."),
    ];
}

impl ConfigRecord for ManipulatorCalibrationInput {
    const TITLE: &'static str = "AindManipulatorCalibrationInput";
    const FIELDS: &'static [Field] = &[
        Field::optional("full_step_to_mm", ManipulatorPosition::KIND),
        Field::optional("axis_configuration", FieldKind::List(&AXIS_CONFIGURATION))
            .describe("Axes configuration. Only the axes that are configured will be enabled."),
        Field::optional("homing_order", FieldKind::List(&AXIS)),
        Field::optional("initial_position", ManipulatorPosition::KIND),
    ];
}

impl ConfigRecord for ManipulatorCalibrationOutput {
    const TITLE: &'static str = "AindManipulatorCalibrationOutput";
    const FIELDS: &'static [Field] = &[];
}

impl ConfigRecord for ManipulatorCalibration {
    const TITLE: &'static str = "AindManipulatorCalibration";
    const FIELDS: &'static [Field] = &[
        Field::optional("device_name", FieldKind::String)
            .describe("Must match a device name in rig/instrument"),
        Field::required("input", ManipulatorCalibrationInput::KIND),
        Field::required("output", ManipulatorCalibrationOutput::KIND),
        Field::nullable("date", FieldKind::DateTime),
        Field::optional("description", FieldKind::String),
        Field::nullable("notes", FieldKind::String),
    ];
}

impl ConfigRecord for ManipulatorCalibrationParameters {
    const TITLE: &'static str = "CalibrationParameters";
    const FIELDS: &'static [Field] = &[
        Field::nullable("rng_seed", FieldKind::Number)
            .describe("Seed of the random number generator"),
        Field::optional("aind_behavior_services_pkg_version", FieldKind::String),
    ];
}

impl ConfigRecord for ManipulatorCalibrationLogic {
    const TITLE: &'static str = "CalibrationLogic";
    const FIELDS: &'static [Field] = &[
        Field::optional("name", FieldKind::String).describe("Name of the task logic"),
        Field::optional("description", FieldKind::String)
            .describe("Description of the task."),
        Field::required("task_parameters", ManipulatorCalibrationParameters::KIND),
        Field::optional("version", FieldKind::String),
        Field::nullable("stage_name", FieldKind::String)
            .describe("Optional stage name the `Task` object instance represents."),
    ];
}

impl Versioned for ManipulatorCalibrationLogic {
    const CURRENT_VERSION: &'static str = LOGIC_VERSION;

    fn version(&self) -> &str {
        &self.version
    }

    fn set_version(&mut self, version: String) {
        self.version = version;
    }
}

impl ConfigRecord for ManipulatorDevice {
    const TITLE: &'static str = "AindManipulatorDevice";
    const FIELDS: &'static [Field] = &[
        Field::optional("device_type", DEVICE_TYPE),
        Field::optional("who_am_i", FieldKind::Integer),
        Field::nullable("serial_number", FieldKind::String).describe("Device serial number"),
        Field::required("port_name", FieldKind::String).describe("Device port name"),
        Field::nullable("additional_settings", FieldKind::Any).describe("Additional settings"),
        Field::required("calibration", ManipulatorCalibration::KIND)
            .describe("Calibration of the manipulator"),
    ];
}

impl ConfigRecord for ManipulatorCalibrationRig {
    const TITLE: &'static str = "AindManipulatorCalibrationRig";
    const FIELDS: &'static [Field] = &[
        Field::optional("describedBy", FieldKind::String),
        Field::optional("aind_behavior_services_pkg_version", FieldKind::String),
        Field::optional("version", FieldKind::String),
        Field::nullable("computer_name", FieldKind::String).describe("Computer name"),
        Field::required("rig_name", FieldKind::String).describe("Rig name"),
        Field::required("manipulator", ManipulatorDevice::KIND).describe("Manipulator device"),
    ];
}

impl Versioned for ManipulatorCalibrationRig {
    const CURRENT_VERSION: &'static str = RIG_SCHEMA_VERSION;

    fn version(&self) -> &str {
        &self.version
    }

    fn set_version(&mut self, version: String) {
        self.version = version;
    }
}
