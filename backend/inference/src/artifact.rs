//! Reading fitted artifacts from disk.

use motorspeed_core::MotorError;
use serde::de::DeserializeOwned;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Read and parse one JSON artifact. Any failure is a [`MotorError::ModelLoad`].
pub async fn load_json<T: DeserializeOwned>(artifact: &str, path: &Path) -> Result<T, MotorError> {
    debug!(artifact, path = %path.display(), "Reading artifact");

    let raw = fs::read(path).await.map_err(|e| {
        MotorError::model_load(artifact, format!("cannot read {}: {e}", path.display()))
    })?;

    let parsed = serde_json::from_slice(&raw).map_err(|e| {
        MotorError::model_load(artifact, format!("cannot parse {}: {e}", path.display()))
    })?;

    info!(artifact, path = %path.display(), bytes = raw.len(), "Loaded artifact");
    Ok(parsed)
}
