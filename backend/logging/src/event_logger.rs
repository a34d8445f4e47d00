//! Session Event Logger
//!
//! Structured events (login, prediction, chat) emitted through `tracing` on
//! the `session_events` target.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use crate::redact::redact_sensitive_data;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    LoginSucceeded { username: String },
    LoginFailed { username: String },
    Prediction { rpm: f64 },
    PredictionFailed { error_msg: String },
    ChatExchange { query: String, rule: Option<String> },
    SessionEnded,
    SessionReaped { idle_secs: i64 },
}

#[derive(Debug, Serialize)]
pub struct EventLogEntry {
    pub session_id: String,
    pub timestamp: DateTime<Utc>,
    pub event: SessionEvent,
}

pub struct EventLogger;

impl EventLogger {
    /// Redacts free text in the event and logs it for the given session.
    pub fn log_event(session_id: &str, event: SessionEvent) -> EventLogEntry {
        let event = match event {
            SessionEvent::LoginSucceeded { username } => SessionEvent::LoginSucceeded {
                username: redact_sensitive_data(&username),
            },
            SessionEvent::LoginFailed { username } => SessionEvent::LoginFailed {
                username: redact_sensitive_data(&username),
            },
            SessionEvent::ChatExchange { query, rule } => SessionEvent::ChatExchange {
                query: redact_sensitive_data(&query),
                rule,
            },
            other => other,
        };

        let entry = EventLogEntry {
            session_id: session_id.into(),
            timestamp: Utc::now(),
            event,
        };

        info!(target: "session_events", event = ?entry, "Session event");
        entry
    }
}
