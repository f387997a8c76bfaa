pub const LOG_LEVEL: &str = "info";
pub const DOTENV_FILE: &str = ".env";
