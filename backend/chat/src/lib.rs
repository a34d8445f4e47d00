//! Keyword chat: a fixed, ordered rule table and the responder that walks it.

pub mod responder;
pub mod rules;

pub use responder::{Reply, Responder};
pub use rules::{ChatRule, BUILTIN_RULES, FALLBACK_RESPONSE};
