use anyhow::Result;

use crate::argsets::SchemaArgs;

pub fn schema(args: SchemaArgs) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&args.kind.json_schema())?);
    Ok(())
}
