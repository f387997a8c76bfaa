use anyhow::Result;

use crate::argsets::DefaultsArgs;

pub fn defaults(args: DefaultsArgs) -> Result<()> {
    let record = args.kind.construct_default();
    println!("{}", serde_json::to_string_pretty(&record.to_value()?)?);
    Ok(())
}
