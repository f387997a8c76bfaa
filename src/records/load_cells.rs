pub use rig_models::load_cells::{
    LoadCellCalibration, LoadCellsCalibration, LoadCellsCalibrationInput,
    LoadCellsCalibrationOutput, LoadCellsOperationControl, CHANNEL_COUNT, DESCRIBED_BY,
    SCHEMA_VERSION,
};

use crate::model::{ConfigRecord, Field, FieldKind, Versioned};

const WEIGHT_PAIR: FieldKind = FieldKind::Pair(&FieldKind::Number);
const CELL_CALIBRATION: FieldKind = LoadCellCalibration::KIND;

impl ConfigRecord for LoadCellCalibration {
    const TITLE: &'static str = "LoadCellCalibrationInput";
    const FIELDS: &'static [Field] = &[
        Field::optional("measured_offset", FieldKind::Map(&FieldKind::Number)).describe(
            "Load cells offset. Each entry is expected to be in the format of: Channel : (offset, baseline)",
        ),
        Field::optional("measured_weight", FieldKind::List(&WEIGHT_PAIR)).describe(
            "Load cells measured weight. Each entry is expected to be in the format of: (known weight(g), baseline)",
        ),
    ];
}

impl ConfigRecord for LoadCellsCalibrationInput {
    const TITLE: &'static str = "LoadCellsCalibrationInput";
    const FIELDS: &'static [Field] = &[
        Field::optional("channels", FieldKind::Map(&CELL_CALIBRATION))
            .describe("Load cells calibration data"),
    ];
}

impl ConfigRecord for LoadCellsCalibrationOutput {
    const TITLE: &'static str = "LoadCellsCalibrationOutput";
    const FIELDS: &'static [Field] = &[
        Field::optional("offset", FieldKind::Map(&FieldKind::Integer)).describe("Load cells offset"),
        Field::optional("baseline", FieldKind::Map(&FieldKind::Number)).describe(
            "Load cells baseline to be subtracted from the raw data after applying the offset.",
        ),
        Field::optional("weight_lookup", FieldKind::Map(&WEIGHT_PAIR))
            .describe("Load cells lookup calibration table for each channel: (weight, baseline)."),
    ];
}

impl ConfigRecord for LoadCellsCalibration {
    const TITLE: &'static str = "LoadCellsCalibration";
    const FIELDS: &'static [Field] = &[
        Field::optional("device_name", FieldKind::String)
            .describe("Must match a device name in rig/instrument"),
        Field::required("input", LoadCellsCalibrationInput::KIND),
        Field::required("output", LoadCellsCalibrationOutput::KIND),
        Field::nullable("date", FieldKind::DateTime),
        Field::optional("description", FieldKind::String),
        Field::nullable("notes", FieldKind::String),
    ];
}

impl ConfigRecord for LoadCellsOperationControl {
    const TITLE: &'static str = "LoadCellsOperationControl";
    const FIELDS: &'static [Field] = &[
        Field::optional("describedBy", FieldKind::String),
        Field::optional("schema_version", FieldKind::String),
        Field::optional("channels", FieldKind::List(&FieldKind::Integer))
            .describe("List of channels to calibrate"),
        Field::optional("offset_buffer_size", FieldKind::Integer)
            .describe("Size of the buffer (in samples) acquired."),
    ];
}

impl Versioned for LoadCellsOperationControl {
    const CURRENT_VERSION: &'static str = SCHEMA_VERSION;

    fn version(&self) -> &str {
        &self.schema_version
    }

    fn set_version(&mut self, version: String) {
        self.schema_version = version;
    }
}
