//! Motor Speed Predictor HTTP front end.
//!
//! Serves the single page: login gate, parameter form, prediction result,
//! and chat transcript. Each request is one state transition on the
//! caller's session followed by one render.

pub mod auth;
pub mod form;
pub mod handlers;
pub mod health_api;
pub mod render;
pub mod server;
pub mod session;
pub mod session_reaper;
pub mod session_registry;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{CredentialTable, SessionCookie};
pub use server::{build_router, start_server, GatewayState, ServerSettings};
pub use session::{ActionOutcome, Session, UserAction};
pub use session_registry::SessionRegistry;
