use serde::{Deserialize, Serialize};

/// Harp device WhoAmI identifiers used as defaults by the device records.
pub mod who_am_i {
    pub const OLFACTOMETER: i64 = 1140;
    pub const CLOCK_GENERATOR: i64 = 1158;
    pub const ANALOG_INPUT: i64 = 1236;
    pub const TREADMILL: i64 = 1402;
    pub const STEPPER_DRIVER: i64 = 1130;
}

#[doc = "Device type"]
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum HarpDeviceType {
    #[serde(rename = "loadcells")]
    LoadCells,
    #[serde(rename = "behavior")]
    Behavior,
    #[serde(rename = "olfactometer")]
    Olfactometer,
    #[serde(rename = "clockgenerator")]
    ClockGenerator,
    #[serde(rename = "clocksynchronizer")]
    ClockSynchronizer,
    #[serde(rename = "treadmill")]
    Treadmill,
    #[serde(rename = "lickometer")]
    Lickometer,
    #[serde(rename = "analoginput")]
    AnalogInput,
    #[serde(rename = "soundcard")]
    SoundCard,
    #[serde(rename = "sniffdetector")]
    SniffDetector,
    #[serde(rename = "cuttlefish")]
    Cuttlefish,
    #[serde(rename = "stepperdriver")]
    StepperDriver,
    #[serde(rename = "generic")]
    Generic,
}

impl HarpDeviceType {
    pub const ALL: [HarpDeviceType; 13] = [
        Self::LoadCells,
        Self::Behavior,
        Self::Olfactometer,
        Self::ClockGenerator,
        Self::ClockSynchronizer,
        Self::Treadmill,
        Self::Lickometer,
        Self::AnalogInput,
        Self::SoundCard,
        Self::SniffDetector,
        Self::Cuttlefish,
        Self::StepperDriver,
        Self::Generic,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LoadCells => "loadcells",
            Self::Behavior => "behavior",
            Self::Olfactometer => "olfactometer",
            Self::ClockGenerator => "clockgenerator",
            Self::ClockSynchronizer => "clocksynchronizer",
            Self::Treadmill => "treadmill",
            Self::Lickometer => "lickometer",
            Self::AnalogInput => "analoginput",
            Self::SoundCard => "soundcard",
            Self::SniffDetector => "sniffdetector",
            Self::Cuttlefish => "cuttlefish",
            Self::StepperDriver => "stepperdriver",
            Self::Generic => "generic",
        }
    }
}

impl Default for HarpDeviceType {
    fn default() -> Self {
        HarpDeviceType::Generic
    }
}

impl std::fmt::Display for HarpDeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HarpDeviceType {
    type Err = &'static str;
    fn from_str(value: &str) -> Result<Self, &'static str> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == value)
            .ok_or("invalid value")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_as_str() {
        for device_type in HarpDeviceType::ALL {
            let wire = serde_json::to_value(device_type).unwrap();
            assert_eq!(wire, serde_json::json!(device_type.as_str()));
            assert_eq!(device_type.as_str().parse(), Ok(device_type));
        }
    }

    #[test]
    fn unknown_device_type_is_rejected() {
        assert!("harp".parse::<HarpDeviceType>().is_err());
        assert!(serde_json::from_str::<HarpDeviceType>("\"Treadmill\"").is_err());
    }
}
