//! `motorspeed-config`: runtime configuration for the motor speed predictor.
//!
//! Provides:
//! - Typed config schema (server, artifacts, logging, session)
//! - YAML loading with a search path
//! - Artifact location overrides from the environment
//! - Default value application
//! - Validation

pub mod defaults;
pub mod env;
pub mod io;
pub mod schema;
pub mod validation;

pub use defaults::apply_all_defaults;
pub use env::{apply_env_overrides, apply_env_overrides_with, MODEL_PATH_VAR, SCALER_PATH_VAR};
pub use io::{find_config_file, load_config};
pub use schema::{ArtifactsConfig, LoggingConfig, MotorSpeedConfig, ServerConfig, SessionConfig};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::{bail, Result};
use std::path::Path;

/// Load, apply env overrides, apply defaults, and validate a config file.
///
/// This is the main entry point for loading a config at runtime. Validation
/// errors abort; warnings are logged.
pub async fn load_and_prepare(path: Option<&Path>) -> Result<MotorSpeedConfig> {
    let config = match path {
        Some(p) => load_config(p).await?,
        None => match find_config_file() {
            Some(found) => load_config(&found).await?,
            None => {
                tracing::debug!("No config file found; using defaults");
                MotorSpeedConfig::default()
            }
        },
    };

    let config = apply_env_overrides(config);
    let config = apply_all_defaults(config);

    let report = validate(&config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }
    if !report.is_valid() {
        let details: Vec<String> = report
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.path, e.message))
            .collect();
        bail!(
            "config has {} validation error(s): {}",
            report.errors.len(),
            details.join("; ")
        );
    }

    Ok(config)
}
