use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use icopack_core::DEFAULT_SIZES;

/// Name looked up in the working directory when `--config` is not given.
const CONFIG_FILE: &str = "icopack.json";

/// On-disk configuration: recognized keys are `input`, `output`, `sizes`.
///
/// Every field is optional in the file; absent fields fall back to the
/// built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,
}

fn default_input() -> PathBuf {
    PathBuf::from("icon.jpeg")
}
fn default_output() -> PathBuf {
    PathBuf::from("windows/runner/resources/app_icon.ico")
}
fn default_sizes() -> Vec<u32> {
    DEFAULT_SIZES.to_vec()
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            sizes: default_sizes(),
        }
    }
}

impl IconConfig {
    /// Load configuration from `explicit` (or `icopack.json` in the
    /// working directory), falling back to defaults. Read and parse
    /// failures are logged, not fatal.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => PathBuf::from(CONFIG_FILE),
        };
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(json) => match serde_json::from_str::<IconConfig>(&json) {
                    Ok(config) => {
                        info!("Loaded configuration from {}", path.display());
                        return config;
                    }
                    Err(e) => error!("Failed to parse {}: {e}", path.display()),
                },
                Err(e) => error!("Failed to read {}: {e}", path.display()),
            }
        } else {
            debug!("No configuration file at {}", path.display());
        }
        Self::default()
    }
}
