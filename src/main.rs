mod argsets;
mod command;
mod constants;
mod helpers;

use anyhow::{anyhow, Result};
use env_logger::Env;

use constants::{defaults, envvars};

const CMD_KINDS: &str = "kinds";
const CMD_DEFAULTS: &str = "defaults";
const CMD_DECODE: &str = "decode";
const CMD_SCHEMA: &str = "schema";
const CMD_CHECK_VERSION: &str = "check-version";

fn main() -> Result<()> {
    helpers::load_dotenv();
    env_logger::Builder::from_env(Env::default().filter_or(envvars::LOG_LEVEL, defaults::LOG_LEVEL))
        .init();

    let mut args = pico_args::Arguments::from_env();
    match args.subcommand()?.as_deref() {
        Some(CMD_KINDS) => command::kinds(),
        Some(CMD_DEFAULTS) => command::defaults(argsets::DefaultsArgs {
            kind: args.free_from_str()?,
        }),
        Some(CMD_DECODE) => command::decode(argsets::DecodeArgs {
            kind: args.free_from_str()?,
            input: args.opt_free_from_str()?,
        }),
        Some(CMD_SCHEMA) => command::schema(argsets::SchemaArgs {
            kind: args.free_from_str()?,
        }),
        Some(CMD_CHECK_VERSION) => {
            let expect = args.opt_value_from_str("--expect")?;
            command::check_version(argsets::CheckVersionArgs {
                kind: args.free_from_str()?,
                input: args.opt_free_from_str()?,
                expect,
            })
        }
        _ => Err(anyhow!(
            "Subcommand must be one of '{CMD_KINDS}', '{CMD_DEFAULTS}', '{CMD_DECODE}', '{CMD_SCHEMA}', '{CMD_CHECK_VERSION}'"
        )),
    }
}
