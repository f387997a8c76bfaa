// Types from load_cells_calibration.json

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Timestamp;

pub const SCHEMA_VERSION: &str = "0.3.0";
pub const DESCRIBED_BY: &str = "https://raw.githubusercontent.com/AllenNeuralDynamics/Aind.Behavior.Services/main/src/DataSchemas/schemas/load_cells_calibration.json";

/// Number of channels on a Harp load cells board.
pub const CHANNEL_COUNT: i64 = 8;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct LoadCellCalibration {
    #[doc = "Load cells offset. Each entry is expected to be in the format of: Channel : (offset, baseline)"]
    #[serde(default)]
    pub measured_offset: BTreeMap<String, f64>,
    #[doc = "Load cells measured weight. Each entry is expected to be in the format of: (known weight(g), baseline)"]
    #[serde(default)]
    pub measured_weight: Vec<[f64; 2]>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct LoadCellsCalibrationInput {
    #[doc = "Load cells calibration data"]
    #[serde(default)]
    pub channels: BTreeMap<String, LoadCellCalibration>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LoadCellsCalibrationOutput {
    #[doc = "Load cells offset"]
    #[serde(default = "defaults::offset")]
    pub offset: BTreeMap<String, i64>,
    #[doc = "Load cells baseline to be subtracted from the raw data after applying the offset."]
    #[serde(default = "defaults::baseline")]
    pub baseline: BTreeMap<String, f64>,
    #[doc = "Load cells lookup calibration table for each channel: (weight, baseline)."]
    #[serde(default)]
    pub weight_lookup: BTreeMap<String, [f64; 2]>,
}
impl Default for LoadCellsCalibrationOutput {
    fn default() -> Self {
        Self {
            offset: defaults::offset(),
            baseline: defaults::baseline(),
            weight_lookup: BTreeMap::new(),
        }
    }
}

#[doc = "Load cells calibration class"]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LoadCellsCalibration {
    #[doc = "Must match a device name in rig/instrument"]
    #[serde(default = "defaults::device_name")]
    pub device_name: String,
    pub input: LoadCellsCalibrationInput,
    pub output: LoadCellsCalibrationOutput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(default = "defaults::description")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
impl Default for LoadCellsCalibration {
    fn default() -> Self {
        Self {
            device_name: defaults::device_name(),
            input: LoadCellsCalibrationInput::default(),
            output: LoadCellsCalibrationOutput::default(),
            date: None,
            description: defaults::description(),
            notes: None,
        }
    }
}

#[doc = "Load cells operation control model that is used to run a calibration data acquisition workflow"]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LoadCellsOperationControl {
    #[serde(rename = "describedBy", default = "defaults::described_by")]
    pub described_by: String,
    #[serde(default = "defaults::schema_version")]
    pub schema_version: String,
    #[doc = "List of channels to calibrate"]
    #[serde(default = "defaults::channels")]
    pub channels: Vec<i64>,
    #[doc = "Size of the buffer (in samples) acquired."]
    #[serde(default = "defaults::offset_buffer_size")]
    pub offset_buffer_size: i64,
}
impl Default for LoadCellsOperationControl {
    fn default() -> Self {
        Self {
            described_by: defaults::described_by(),
            schema_version: defaults::schema_version(),
            channels: defaults::channels(),
            offset_buffer_size: defaults::offset_buffer_size(),
        }
    }
}

mod defaults {
    use std::collections::BTreeMap;

    use super::CHANNEL_COUNT;

    pub(super) fn offset() -> BTreeMap<String, i64> {
        (0..CHANNEL_COUNT).map(|ch| (ch.to_string(), 0)).collect()
    }
    pub(super) fn baseline() -> BTreeMap<String, f64> {
        (0..CHANNEL_COUNT).map(|ch| (ch.to_string(), 0.0)).collect()
    }
    pub(super) fn channels() -> Vec<i64> {
        (0..CHANNEL_COUNT).collect()
    }
    pub(super) fn offset_buffer_size() -> i64 {
        200
    }
    pub(super) fn device_name() -> String {
        "LoadCells".to_string()
    }
    pub(super) fn description() -> String {
        "Calibration of the load cells system".to_string()
    }
    pub(super) fn described_by() -> String {
        super::DESCRIBED_BY.to_string()
    }
    pub(super) fn schema_version() -> String {
        super::SCHEMA_VERSION.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_covers_every_channel() {
        let output = LoadCellsCalibrationOutput::default();
        assert_eq!(output.offset.len(), CHANNEL_COUNT as usize);
        assert_eq!(output.baseline.get("7"), Some(&0.0));
        assert!(output.weight_lookup.is_empty());
    }

    #[test]
    fn present_channels_replace_default_map() {
        let output: LoadCellsCalibrationOutput =
            serde_json::from_str(r#"{"offset": {"2": -12}}"#).unwrap();
        assert_eq!(output.offset.len(), 1);
        assert_eq!(output.offset["2"], -12);
        assert_eq!(output.baseline.len(), CHANNEL_COUNT as usize);
    }
}
