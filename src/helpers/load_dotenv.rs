use std::env;
use std::path::{Path, PathBuf};

use crate::constants::envvars;

/// Loads `.env` from the working directory, then `$SINGDTO_CONFIG_DIR/.env`.
///
/// Runs before logging is set up, so the caller reports what was loaded.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();
    if let Ok(path) = dotenv::dotenv() {
        loaded.push(path);
    }
    if let Ok(config_dir) = env::var(envvars::CONFIG_DIR) {
        let config_dotenv = Path::new(&config_dir).join(".env");
        if dotenv::from_path(&config_dotenv).is_ok() {
            loaded.push(config_dotenv);
        }
    }
    loaded
}
