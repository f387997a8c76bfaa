use anyhow::{anyhow, Result};
use rigcal::model::{RecordKind, VersionStatus};

use crate::argsets::CheckVersionArgs;
use crate::helpers::read_payload;

pub fn check_version(args: CheckVersionArgs) -> Result<()> {
    let payload = read_payload(args.input.as_deref())?;
    let record = args.kind.decode(&payload)?;
    let version = record.version().ok_or_else(|| unversioned(args.kind))?;

    if let Some(expected) = args.expect.as_deref() {
        if record.validate_version(expected) != Some(true) {
            return Err(anyhow!(
                "Schema version mismatch: expected {expected}, found {version}"
            ));
        }
    }

    match record.check_version().ok_or_else(|| unversioned(args.kind))?? {
        VersionStatus::Current => println!("{version}: current"),
        VersionStatus::Older { found, current } => {
            log::warn!("Schema version {found} predates {current}");
            println!("{found}: older than {current}");
        }
    }
    Ok(())
}

fn unversioned(kind: RecordKind) -> anyhow::Error {
    anyhow!("Records of kind '{kind}' carry no schema version")
}
