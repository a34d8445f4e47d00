//! Config file discovery and loading.

use crate::schema::MotorSpeedConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Config file looked up in the working directory.
const LOCAL_CONFIG_FILE: &str = "motorspeed.yaml";

/// Locate a config file when none was given on the command line.
/// Priority: `./motorspeed.yaml` > `<config dir>/motorspeed/config.yaml`
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }
    let user = dirs::config_dir()?.join("motorspeed").join("config.yaml");
    user.exists().then_some(user)
}

/// Load and parse the config from disk.
///
/// Returns `Ok(Default::default())` if the file doesn't exist.
pub async fn load_config(path: &Path) -> Result<MotorSpeedConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(MotorSpeedConfig::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    // An empty file parses as YAML null.
    if raw.trim().is_empty() {
        return Ok(MotorSpeedConfig::default());
    }

    let config: MotorSpeedConfig = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse config YAML at: {}", path.display()))?;

    info!(path = %path.display(), "Loaded config");
    Ok(config)
}
