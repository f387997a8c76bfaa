//! JSON Schema export from field descriptors
//!
//! Nullable fields are emitted as `oneOf: [<schema>, {"type": "null"}]`, the
//! same shape the published rig schemas use.

use serde_json::{json, Map, Value};

use super::field::{ConfigRecord, Field, FieldKind};

const DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

pub fn json_schema<T: ConfigRecord>() -> Value {
    let mut schema = kind_schema(&T::KIND);
    if let Some(object) = schema.as_object_mut() {
        object.insert("$schema".to_string(), Value::from(DIALECT));
    }
    schema
}

fn record_schema(title: &str, fields: &[Field], defaults: Option<Value>) -> Value {
    let mut properties = Map::new();
    for field in fields {
        let mut property = kind_schema(&field.kind);
        if field.nullable {
            property = json!({ "oneOf": [property, { "type": "null" }] });
        }
        if let Some(object) = property.as_object_mut() {
            if let Some(description) = field.description {
                object.insert("description".to_string(), Value::from(description));
            }
            let default = defaults.as_ref().and_then(|d| d.get(field.name));
            if let (false, Some(default)) = (field.required, default) {
                object.insert("default".to_string(), default.clone());
            }
        }
        properties.insert(field.name.to_string(), property);
    }

    let required: Vec<&str> = fields
        .iter()
        .filter(|f| f.required)
        .map(|f| f.name)
        .collect();

    json!({
        "title": title,
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn kind_schema(kind: &FieldKind) -> Value {
    match kind {
        FieldKind::Number => json!({ "type": "number" }),
        FieldKind::Integer => json!({ "type": "integer" }),
        FieldKind::String => json!({ "type": "string" }),
        FieldKind::Boolean => json!({ "type": "boolean" }),
        FieldKind::DateTime => json!({ "type": "string", "format": "date-time" }),
        FieldKind::Enum(values) => {
            let values: Vec<Value> = values.iter().map(|v| v.to_json()).collect();
            json!({ "enum": values })
        }
        FieldKind::Record {
            title,
            fields,
            defaults,
        } => record_schema(title, fields, defaults()),
        FieldKind::List(item) => json!({ "type": "array", "items": kind_schema(item) }),
        FieldKind::Pair(item) => json!({
            "type": "array",
            "items": kind_schema(item),
            "minItems": 2,
            "maxItems": 2,
        }),
        FieldKind::Map(item) => json!({
            "type": "object",
            "additionalProperties": kind_schema(item),
        }),
        FieldKind::Any => json!({}),
    }
}
