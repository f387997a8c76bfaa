use std::env;
use std::path::Path;

use crate::constants::{defaults, envvars};

pub fn load_dotenv() {
    if dotenv::dotenv().is_ok() {
        eprintln!("Loaded local {}", defaults::DOTENV_FILE);
    }
    // Also load $RIGCAL_CONFIG_DIR/.env if exists
    if let Ok(config_dir) = env::var(envvars::CONFIG_DIR) {
        let config_dotenv = Path::new(&config_dir).join(defaults::DOTENV_FILE);
        if dotenv::from_path(&config_dotenv).is_ok() {
            eprintln!("Loaded {}", config_dotenv.display());
        }
    }
}
