//! Config validation with user-friendly error messages.

use crate::schema::MotorSpeedConfig;
use std::net::IpAddr;
use thiserror::Error;

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &MotorSpeedConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_server(config, &mut report);
    validate_artifacts(config, &mut report);
    validate_session(config, &mut report);
    report
}

fn validate_server(config: &MotorSpeedConfig, report: &mut ValidationReport) {
    let Some(server) = &config.server else { return };
    if let Some(port) = server.port {
        if port == 0 {
            report.error("server.port", "port must be > 0");
        } else if port < 1024 && port != 80 && port != 443 {
            report.warn(
                "server.port",
                format!("Port {port} requires elevated privileges; consider using a port >= 1024"),
            );
        }
    }
    if let Some(bind) = &server.bind_address {
        if bind.trim().is_empty() {
            report.error("server.bindAddress", "bind address cannot be empty");
        } else if bind.parse::<IpAddr>().is_err() {
            report.error(
                "server.bindAddress",
                format!("'{bind}' is not an IPv4 or IPv6 address"),
            );
        }
    }
}

fn validate_artifacts(config: &MotorSpeedConfig, report: &mut ValidationReport) {
    let Some(artifacts) = &config.artifacts else { return };
    for (path, value) in [
        ("artifacts.scalerPath", &artifacts.scaler_path),
        ("artifacts.modelPath", &artifacts.model_path),
    ] {
        if value.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            report.error(path, "artifact path cannot be empty");
        }
    }
}

fn validate_session(config: &MotorSpeedConfig, report: &mut ValidationReport) {
    let Some(session) = &config.session else { return };
    if session.idle_timeout_secs == Some(0) {
        report.error("session.idleTimeoutSecs", "idle timeout must be > 0");
    }
    if session.reap_interval_secs == Some(0) {
        report.error("session.reapIntervalSecs", "reap interval must be > 0");
    }
    if let (Some(idle), Some(reap)) = (session.idle_timeout_secs, session.reap_interval_secs) {
        if reap > idle {
            report.warn(
                "session.reapIntervalSecs",
                "sweeps run less often than the idle timeout; sessions will outlive it",
            );
        }
    }
    if let Some(name) = &session.cookie_name {
        let valid = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            report.error(
                "session.cookieName",
                "cookie name must be non-empty ASCII letters, digits, '_' or '-'",
            );
        }
    }
}
