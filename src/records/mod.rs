//! Calibration records, one module per schema family
//!
//! Types come from `rig_models`; this layer attaches the field descriptors
//! and version bindings that `crate::model` works with. Import from here,
//! not from `rig_models`.

pub mod harp;
pub mod load_cells;
pub mod manipulator;
pub mod olfactometer;
pub mod treadmill;
pub mod water_valve;

pub use rig_models::Timestamp;

/// Checks that a record's descriptors and its serde shape agree: every
/// encoded key is described, every non-nullable field is encoded, and the
/// default encoding passes validation.
#[cfg(test)]
pub(crate) fn assert_descriptor_matches<T>()
where
    T: crate::model::ConfigRecord + std::fmt::Debug + PartialEq,
{
    use crate::model::{decode_value, encode_value};

    let record = T::default();
    let value = encode_value(&record).unwrap();
    let object = value.as_object().unwrap();

    for key in object.keys() {
        assert!(
            T::FIELDS.iter().any(|f| f.name == key.as_str()),
            "{}: encoded key `{}` has no descriptor",
            T::TITLE,
            key
        );
    }
    for field in T::FIELDS.iter().filter(|f| !f.nullable) {
        assert!(
            object.contains_key(field.name),
            "{}: descriptor `{}` is not encoded",
            T::TITLE,
            field.name
        );
    }

    let decoded: T = decode_value(value).unwrap();
    assert_eq!(decoded, record);
}
