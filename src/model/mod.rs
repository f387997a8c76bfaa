//! Schema-bound configuration model
//!
//! Typed records are described by [`ConfigRecord`] descriptors; `decode`
//! validates a payload against them before materialising the record, so
//! every failure names the offending field.

mod codec;
mod error;
mod field;
mod json_schema;
mod kind;
mod validate;
mod version;

pub use codec::{construct_default, decode, decode_value, encode, encode_pretty, encode_value};
pub use error::{DecodeError, EncodeError, VersionError};
pub use field::{default_value, ConfigRecord, EnumValue, Field, FieldKind, WireEnum};
pub use json_schema::json_schema;
pub use kind::{AnyRecord, RecordKind, UnknownKind};
pub use version::{check_version, coerce_version, validate_version, Versioned, VersionStatus};
