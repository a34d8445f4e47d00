//! Config defaults: applies sensible default values to parsed config.

use crate::schema::{ArtifactsConfig, LoggingConfig, MotorSpeedConfig, ServerConfig, SessionConfig};
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Conventional dashboard port.
pub const DEFAULT_PORT: u16 = 8501;

pub const DEFAULT_SCALER_PATH: &str = "artifacts/scaler.json";
pub const DEFAULT_MODEL_PATH: &str = "artifacts/random_forest_model.json";

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_COOKIE_NAME: &str = "motorspeed_session";

/// Idle sessions are dropped after 30 minutes.
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 30 * 60;

pub const DEFAULT_REAP_INTERVAL_SECS: u64 = 60;

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: MotorSpeedConfig) -> MotorSpeedConfig {
    let config = apply_server_defaults(config);
    let config = apply_artifact_defaults(config);
    let config = apply_logging_defaults(config);
    apply_session_defaults(config)
}

fn apply_server_defaults(mut config: MotorSpeedConfig) -> MotorSpeedConfig {
    let server = config.server.get_or_insert_with(ServerConfig::default);
    if server.bind_address.is_none() {
        server.bind_address = Some(DEFAULT_BIND_ADDRESS.to_string());
    }
    if server.port.is_none() {
        server.port = Some(DEFAULT_PORT);
    }
    config
}

fn apply_artifact_defaults(mut config: MotorSpeedConfig) -> MotorSpeedConfig {
    let artifacts = config.artifacts.get_or_insert_with(ArtifactsConfig::default);
    if artifacts.scaler_path.is_none() {
        artifacts.scaler_path = Some(PathBuf::from(DEFAULT_SCALER_PATH));
    }
    if artifacts.model_path.is_none() {
        artifacts.model_path = Some(PathBuf::from(DEFAULT_MODEL_PATH));
    }
    config
}

fn apply_logging_defaults(mut config: MotorSpeedConfig) -> MotorSpeedConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    if logging.level.is_none() {
        logging.level = Some(DEFAULT_LOG_LEVEL.to_string());
    }
    if logging.json.is_none() {
        logging.json = Some(false);
    }
    config
}

fn apply_session_defaults(mut config: MotorSpeedConfig) -> MotorSpeedConfig {
    let session = config.session.get_or_insert_with(SessionConfig::default);
    if session.cookie_name.is_none() {
        session.cookie_name = Some(DEFAULT_COOKIE_NAME.to_string());
    }
    if session.idle_timeout_secs.is_none() {
        session.idle_timeout_secs = Some(DEFAULT_IDLE_TIMEOUT_SECS);
    }
    if session.reap_interval_secs.is_none() {
        session.reap_interval_secs = Some(DEFAULT_REAP_INTERVAL_SECS);
    }
    config
}
