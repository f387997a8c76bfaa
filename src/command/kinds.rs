use anyhow::Result;
use rigcal::model::RecordKind;

pub fn kinds() -> Result<()> {
    for kind in RecordKind::ALL {
        println!("{kind}");
    }
    Ok(())
}
