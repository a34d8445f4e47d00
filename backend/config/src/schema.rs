//! Motor speed predictor configuration schema.
//!
//! Typed for serde YAML deserialization with camelCase keys. Every section
//! is optional; [`crate::apply_all_defaults`] fills the gaps.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotorSpeedConfig {
    /// HTTP listener
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    /// Fitted scaler and model locations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<ArtifactsConfig>,

    /// Logging configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,

    /// Browser session handling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// tracing filter directive, e.g. "info" or "motorspeed_gateway=debug"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Directory for daily-rolling NDJSON logs; console only when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Emit JSON on the console instead of human-readable lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idle_timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reap_interval_secs: Option<u64>,
}

impl MotorSpeedConfig {
    pub fn bind_address(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.bind_address.as_deref())
            .unwrap_or(crate::defaults::DEFAULT_BIND_ADDRESS)
    }

    pub fn port(&self) -> u16 {
        self.server
            .as_ref()
            .and_then(|s| s.port)
            .unwrap_or(crate::defaults::DEFAULT_PORT)
    }

    pub fn scaler_path(&self) -> PathBuf {
        self.artifacts
            .as_ref()
            .and_then(|a| a.scaler_path.clone())
            .unwrap_or_else(|| PathBuf::from(crate::defaults::DEFAULT_SCALER_PATH))
    }

    pub fn model_path(&self) -> PathBuf {
        self.artifacts
            .as_ref()
            .and_then(|a| a.model_path.clone())
            .unwrap_or_else(|| PathBuf::from(crate::defaults::DEFAULT_MODEL_PATH))
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or(crate::defaults::DEFAULT_LOG_LEVEL)
    }

    pub fn log_dir(&self) -> Option<&std::path::Path> {
        self.logging.as_ref().and_then(|l| l.dir.as_deref())
    }

    pub fn log_json(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn cookie_name(&self) -> &str {
        self.session
            .as_ref()
            .and_then(|s| s.cookie_name.as_deref())
            .unwrap_or(crate::defaults::DEFAULT_COOKIE_NAME)
    }

    pub fn idle_timeout_secs(&self) -> u64 {
        self.session
            .as_ref()
            .and_then(|s| s.idle_timeout_secs)
            .unwrap_or(crate::defaults::DEFAULT_IDLE_TIMEOUT_SECS)
    }

    pub fn reap_interval_secs(&self) -> u64 {
        self.session
            .as_ref()
            .and_then(|s| s.reap_interval_secs)
            .unwrap_or(crate::defaults::DEFAULT_REAP_INTERVAL_SECS)
    }
}
