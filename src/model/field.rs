//! Field descriptors
//!
//! A descriptor is the schema-side view of a record: wire names, semantic
//! types, required-ness and nullability. The validator walks descriptors
//! before serde materialises the record, which is what gives decode errors
//! their field paths.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Wire representation of one member of a closed enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumValue {
    Str(&'static str),
    Int(i64),
}

impl EnumValue {
    pub fn matches(&self, raw: &Value) -> bool {
        match self {
            EnumValue::Str(s) => raw.as_str() == Some(*s),
            EnumValue::Int(i) => as_whole(raw) == Some(*i),
        }
    }

    pub fn to_json(self) -> Value {
        match self {
            EnumValue::Str(s) => Value::from(s),
            EnumValue::Int(i) => Value::from(i),
        }
    }
}

/// Integer value of `raw`, accepting whole floats such as `50.0`.
pub(crate) fn as_whole(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => rig_models::whole_number(n),
        _ => None,
    }
}

/// Semantic type of a field.
#[derive(Clone, Copy, Debug)]
pub enum FieldKind {
    Number,
    Integer,
    String,
    Boolean,
    /// RFC 3339 timestamp carried as a string.
    DateTime,
    Enum(&'static [EnumValue]),
    Record {
        title: &'static str,
        fields: &'static [Field],
        defaults: fn() -> Option<Value>,
    },
    List(&'static FieldKind),
    /// Fixed two-element array, e.g. `[input, output]` lookup pairs.
    Pair(&'static FieldKind),
    /// String-keyed mapping.
    Map(&'static FieldKind),
    /// Untyped JSON, carried through as-is.
    Any,
}

impl FieldKind {
    /// Name used for `expected` in type mismatch errors.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::String => "string",
            FieldKind::Boolean => "boolean",
            FieldKind::DateTime => "date-time string",
            FieldKind::Enum(_) => "enumerated value",
            FieldKind::Record { .. } => "object",
            FieldKind::List(_) => "array",
            FieldKind::Pair(_) => "array of 2 elements",
            FieldKind::Map(_) => "object",
            FieldKind::Any => "any value",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Absent or null is a decode error.
    pub required: bool,
    /// Null decodes to the unset sentinel (`None`).
    pub nullable: bool,
    pub description: Option<&'static str>,
}

impl Field {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Field {
            name,
            kind,
            required: true,
            nullable: false,
            description: None,
        }
    }

    /// Field with a declared default; must not be null when present.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Field {
            name,
            kind,
            required: false,
            nullable: false,
            description: None,
        }
    }

    pub const fn nullable(name: &'static str, kind: FieldKind) -> Self {
        Field {
            name,
            kind,
            required: false,
            nullable: true,
            description: None,
        }
    }

    pub const fn describe(self, description: &'static str) -> Self {
        Field {
            description: Some(description),
            ..self
        }
    }
}

/// A record mirrored from one JSON Schema object type.
pub trait ConfigRecord: Default + Serialize + DeserializeOwned {
    const TITLE: &'static str;
    const FIELDS: &'static [Field];

    /// Descriptor of this record when nested inside another one.
    const KIND: FieldKind = FieldKind::Record {
        title: Self::TITLE,
        fields: Self::FIELDS,
        defaults: default_value::<Self>,
    };
}

/// A closed enum with declared wire representations.
pub trait WireEnum {
    const VALUES: &'static [EnumValue];
}

/// Encoded default instance of `T`, used for schema `default` annotations.
pub fn default_value<T: ConfigRecord>() -> Option<Value> {
    serde_json::to_value(T::default()).ok()
}
