pub const LOG_LEVEL: &str = "LOG_LEVEL";
/// Directory holding an extra `.env` loaded after the working directory one.
pub const CONFIG_DIR: &str = "RIGCAL_CONFIG_DIR";
