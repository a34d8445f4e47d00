//! Artifact location overrides from the environment.
//!
//! Only the two artifact paths can be set this way; everything else comes
//! from the config file.

use crate::schema::{ArtifactsConfig, MotorSpeedConfig};
use std::collections::HashMap;
use std::path::PathBuf;

pub const SCALER_PATH_VAR: &str = "MOTORSPEED_SCALER_PATH";
pub const MODEL_PATH_VAR: &str = "MOTORSPEED_MODEL_PATH";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: MotorSpeedConfig) -> MotorSpeedConfig {
    apply_env_overrides_with(config, &std::env::vars().collect())
}

/// Apply overrides from a provided map (useful for testing).
pub fn apply_env_overrides_with(
    mut config: MotorSpeedConfig,
    env: &HashMap<String, String>,
) -> MotorSpeedConfig {
    let lookup = |name: &str| env.get(name).filter(|v| !v.trim().is_empty()).map(PathBuf::from);

    if let Some(path) = lookup(SCALER_PATH_VAR) {
        tracing::debug!(path = %path.display(), "Scaler path overridden from environment");
        config
            .artifacts
            .get_or_insert_with(ArtifactsConfig::default)
            .scaler_path = Some(path);
    }
    if let Some(path) = lookup(MODEL_PATH_VAR) {
        tracing::debug!(path = %path.display(), "Model path overridden from environment");
        config
            .artifacts
            .get_or_insert_with(ArtifactsConfig::default)
            .model_path = Some(path);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_artifact_paths() {
        let env = HashMap::from([
            (SCALER_PATH_VAR.to_string(), "/tmp/s.json".to_string()),
            (MODEL_PATH_VAR.to_string(), "/tmp/m.json".to_string()),
        ]);
        let cfg = apply_env_overrides_with(MotorSpeedConfig::default(), &env);
        assert_eq!(cfg.scaler_path(), PathBuf::from("/tmp/s.json"));
        assert_eq!(cfg.model_path(), PathBuf::from("/tmp/m.json"));
    }

    #[test]
    fn empty_values_are_ignored() {
        let mut cfg = MotorSpeedConfig::default();
        cfg.artifacts = Some(ArtifactsConfig {
            scaler_path: Some(PathBuf::from("from-file.json")),
            model_path: None,
        });
        let env = HashMap::from([(SCALER_PATH_VAR.to_string(), "  ".to_string())]);
        let cfg = apply_env_overrides_with(cfg, &env);
        assert_eq!(cfg.scaler_path(), PathBuf::from("from-file.json"));
    }
}
