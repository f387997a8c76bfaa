use serde_json::Value;

use super::error::{json_type, DecodeError, EncodeError};
use super::field::ConfigRecord;
use super::validate::{check_record, find_unrepresentable};

/// Builds a record with every field at its declared default.
pub fn construct_default<T: ConfigRecord>() -> T {
    T::default()
}

/// Encodes `record` with fields in declaration order.
pub fn encode<T: ConfigRecord>(record: &T) -> Result<String, EncodeError> {
    encode_value(record)?;
    Ok(serde_json::to_string(record)?)
}

pub fn encode_pretty<T: ConfigRecord>(record: &T) -> Result<String, EncodeError> {
    encode_value(record)?;
    Ok(serde_json::to_string_pretty(record)?)
}

/// Encodes `record` to a JSON value.
///
/// Fails with `EncodeError::NonFinite` when a number field holds NaN or an
/// infinity, which JSON cannot carry.
pub fn encode_value<T: ConfigRecord>(record: &T) -> Result<Value, EncodeError> {
    let value = serde_json::to_value(record)?;
    if let Some(object) = value.as_object() {
        if let Some(field) = find_unrepresentable(T::FIELDS, object, "") {
            return Err(EncodeError::NonFinite(field));
        }
    }
    Ok(value)
}

/// Decodes a JSON payload into `T`.
///
/// Either returns a fully valid record or the first error found; unknown keys
/// are ignored.
pub fn decode<T: ConfigRecord>(payload: &str) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_str(payload)
        .map_err(|e| DecodeError::MalformedPayload(format!("invalid JSON: {e}")))?;
    decode_value(value)
}

pub fn decode_value<T: ConfigRecord>(mut value: Value) -> Result<T, DecodeError> {
    let actual = json_type(&value);
    let object = value.as_object_mut().ok_or_else(|| {
        DecodeError::MalformedPayload(format!(
            "expected a JSON object for {}, found {}",
            T::TITLE,
            actual
        ))
    })?;
    check_record(T::FIELDS, object, "")?;

    log::debug!("decoding {}", T::TITLE);
    serde_json::from_value(value).map_err(|e| DecodeError::MalformedPayload(e.to_string()))
}
