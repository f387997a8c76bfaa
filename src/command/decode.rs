use anyhow::Result;

use crate::argsets::DecodeArgs;
use crate::helpers::read_payload;

/// Decodes one payload and prints its normalized encoding.
pub fn decode(args: DecodeArgs) -> Result<()> {
    let payload = read_payload(args.input.as_deref())?;
    let record = args.kind.decode(&payload)?;
    log::info!("Decoded {} record", args.kind);
    println!("{}", serde_json::to_string_pretty(&record.to_value()?)?);
    Ok(())
}
