use std::path::PathBuf;

use rigcal::model::RecordKind;

pub struct DefaultsArgs {
    pub kind: RecordKind,
}

pub struct DecodeArgs {
    pub kind: RecordKind,
    /// Payload file; stdin when absent.
    pub input: Option<PathBuf>,
}

pub struct SchemaArgs {
    pub kind: RecordKind,
}

pub struct CheckVersionArgs {
    pub kind: RecordKind,
    pub input: Option<PathBuf>,
    pub expect: Option<String>,
}
