pub use rig_models::harp::{who_am_i, HarpDeviceType};

use crate::model::{EnumValue, FieldKind, WireEnum};

impl WireEnum for HarpDeviceType {
    const VALUES: &'static [EnumValue] = &[
        EnumValue::Str("loadcells"),
        EnumValue::Str("behavior"),
        EnumValue::Str("olfactometer"),
        EnumValue::Str("clockgenerator"),
        EnumValue::Str("clocksynchronizer"),
        EnumValue::Str("treadmill"),
        EnumValue::Str("lickometer"),
        EnumValue::Str("analoginput"),
        EnumValue::Str("soundcard"),
        EnumValue::Str("sniffdetector"),
        EnumValue::Str("cuttlefish"),
        EnumValue::Str("stepperdriver"),
        EnumValue::Str("generic"),
    ];
}

pub(crate) const DEVICE_TYPE: FieldKind = FieldKind::Enum(HarpDeviceType::VALUES);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_cover_every_device_type() {
        assert_eq!(HarpDeviceType::VALUES.len(), HarpDeviceType::ALL.len());
        for device_type in HarpDeviceType::ALL {
            let wire = serde_json::to_value(device_type).unwrap();
            assert!(HarpDeviceType::VALUES.iter().any(|v| v.matches(&wire)));
        }
    }
}
