use serde_json::Value;
use thiserror::Error;

/// Why a payload could not be decoded into a record.
///
/// Field names are paths from the record root: `harp_olfactometer.port_name`,
/// `channel_config.3.flow_rate`, `axis_configuration[1].axis`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("missing required field `{0}`")]
    MissingRequiredField(String),
    #[error("invalid value {raw} for enumerated field `{field}`")]
    InvalidEnumValue { field: String, raw: Value },
    #[error("type mismatch for field `{field}`: expected {expected}, found {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl DecodeError {
    /// Field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::MissingRequiredField(field)
            | DecodeError::InvalidEnumValue { field, .. }
            | DecodeError::TypeMismatch { field, .. } => Some(field),
            DecodeError::MalformedPayload(_) => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("could not encode record JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("field `{0}` holds a number JSON cannot represent")]
    NonFinite(String),
}

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("invalid schema version '{version}': {source}")]
    Invalid {
        version: String,
        source: semver::Error,
    },
    #[error("schema version {found} is newer than the supported version {current}")]
    Newer {
        found: semver::Version,
        current: semver::Version,
    },
}

/// JSON type name of a raw value, as reported in type mismatches.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
