//! Structured logging for the motor speed predictor.
//!
//! Handles subscriber setup, log redaction, and per-session event logging.

pub mod event_logger;
pub mod logger;
pub mod redact;

pub use event_logger::{EventLogEntry, EventLogger, SessionEvent};
pub use logger::{bootstrap_dispatch, init_logger, LoggerOptions};
pub use redact::redact_sensitive_data;
