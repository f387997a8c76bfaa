//! Descriptor-driven checks run before serde materialises a record
//!
//! The first failing field wins; fields are visited in declaration order.
//! Whole floats in integer positions are rewritten as integers in place.

use itertools::Itertools;
use serde_json::{Map, Value};

use super::error::{json_type, DecodeError};
use super::field::{as_whole, Field, FieldKind};
use rig_models::Timestamp;

pub(crate) fn check_record(
    fields: &[Field],
    object: &mut Map<String, Value>,
    path: &str,
) -> Result<(), DecodeError> {
    for field in fields {
        let field_path = join(path, field.name);
        match object.get_mut(field.name) {
            None if field.required => {
                return Err(DecodeError::MissingRequiredField(field_path));
            }
            None => {}
            Some(Value::Null) if field.nullable => {}
            Some(Value::Null) if field.required => {
                return Err(DecodeError::MissingRequiredField(field_path));
            }
            Some(value) => check_value(&field.kind, value, &field_path)?,
        }
    }

    let unknown = object
        .keys()
        .filter(|key| !fields.iter().any(|f| f.name == key.as_str()))
        .join(", ");
    if !unknown.is_empty() {
        log::debug!(
            "ignoring unknown keys in {}: {}",
            if path.is_empty() { "<root>" } else { path },
            unknown
        );
    }

    Ok(())
}

fn check_value(kind: &FieldKind, value: &mut Value, path: &str) -> Result<(), DecodeError> {
    let type_ok = match kind {
        FieldKind::Number => value.is_number(),
        FieldKind::Integer => match as_whole(value) {
            Some(i) => {
                *value = Value::from(i);
                true
            }
            None => false,
        },
        FieldKind::String => value.is_string(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::DateTime => value
            .as_str()
            .is_some_and(|s| s.parse::<Timestamp>().is_ok()),
        FieldKind::Any => true,
        FieldKind::Enum(values) => {
            if values.iter().any(|v| v.matches(value)) {
                if let Some(i) = as_whole(value) {
                    *value = Value::from(i);
                }
                return Ok(());
            }
            return Err(DecodeError::InvalidEnumValue {
                field: path.to_string(),
                raw: value.clone(),
            });
        }
        FieldKind::Record { fields, .. } => match value.as_object_mut() {
            Some(object) => return check_record(fields, object, path),
            None => false,
        },
        FieldKind::List(item) => match value.as_array_mut() {
            Some(items) => {
                for (i, v) in items.iter_mut().enumerate() {
                    check_value(item, v, &format!("{path}[{i}]"))?;
                }
                return Ok(());
            }
            None => false,
        },
        FieldKind::Pair(item) => match value.as_array_mut() {
            Some(items) if items.len() == 2 => {
                for (i, v) in items.iter_mut().enumerate() {
                    check_value(item, v, &format!("{path}[{i}]"))?;
                }
                return Ok(());
            }
            _ => false,
        },
        FieldKind::Map(item) => match value.as_object_mut() {
            Some(entries) => {
                for (key, v) in entries.iter_mut() {
                    check_value(item, v, &join(path, key))?;
                }
                return Ok(());
            }
            None => false,
        },
    };

    if type_ok {
        Ok(())
    } else {
        Err(DecodeError::TypeMismatch {
            field: path.to_string(),
            expected: kind.expected(),
            actual: json_type(value),
        })
    }
}

/// Path of the first `null` the encoder produced for a described value.
///
/// Unset options are skipped when encoding, so a `null` in a typed position
/// is a float serde_json could not represent (NaN or an infinity).
pub(crate) fn find_unrepresentable(
    fields: &[Field],
    object: &Map<String, Value>,
    path: &str,
) -> Option<String> {
    fields.iter().find_map(|field| {
        let value = object.get(field.name)?;
        find_in_value(&field.kind, value, &join(path, field.name))
    })
}

fn find_in_value(kind: &FieldKind, value: &Value, path: &str) -> Option<String> {
    match (kind, value) {
        (FieldKind::Any, _) => None,
        (_, Value::Null) => Some(path.to_string()),
        (FieldKind::Record { fields, .. }, Value::Object(object)) => {
            find_unrepresentable(fields, object, path)
        }
        (FieldKind::List(item) | FieldKind::Pair(item), Value::Array(items)) => items
            .iter()
            .enumerate()
            .find_map(|(i, v)| find_in_value(item, v, &format!("{path}[{i}]"))),
        (FieldKind::Map(item), Value::Object(entries)) => entries
            .iter()
            .find_map(|(key, v)| find_in_value(item, v, &join(path, key))),
        _ => None,
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}
