//! Chat Responder.

use motorspeed_core::Transcript;
use tracing::debug;

use crate::rules::{ChatRule, BUILTIN_RULES, FALLBACK_RESPONSE};

/// The answer to one query and the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    /// `None` when the fallback answered.
    pub rule: Option<&'static str>,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Responder {
    rules: &'static [ChatRule],
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(BUILTIN_RULES)
    }
}

impl Responder {
    pub fn new(rules: &'static [ChatRule]) -> Self {
        Self { rules }
    }

    /// Case-insensitive, first match wins. Never fails.
    pub fn respond(&self, query: &str) -> Reply {
        let lowered = query.to_lowercase();
        match self.rules.iter().find(|r| r.matches(&lowered)) {
            Some(rule) => Reply {
                rule: Some(rule.name),
                text: rule.response,
            },
            None => Reply {
                rule: None,
                text: FALLBACK_RESPONSE,
            },
        }
    }

    /// Answer `query` and append the user turn, then the bot turn.
    pub fn handle(&self, transcript: &mut Transcript, query: &str) -> Reply {
        let reply = self.respond(query);
        debug!(rule = ?reply.rule, "Chat reply selected");
        transcript.push_exchange(query, reply.text);
        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motorspeed_core::Role;

    #[test]
    fn speed_wins_over_model() {
        let reply = Responder::default().respond("what speed model do you use");
        assert_eq!(reply.rule, Some("speed"));
        assert!(reply.text.starts_with("This app predicts motor speed"));
    }

    #[test]
    fn model_rule() {
        let reply = Responder::default().respond("Which MODEL is this?");
        assert_eq!(reply.rule, Some("model"));
        assert!(reply.text.contains("Random Forest"));
    }

    #[test]
    fn creator_and_developer_share_a_rule() {
        let r = Responder::default();
        assert_eq!(r.respond("who is the Creator").rule, Some("attribution"));
        assert_eq!(r.respond("DEVELOPER?").rule, Some("attribution"));
    }

    #[test]
    fn model_outranks_developer() {
        assert_eq!(
            Responder::default().respond("developer of the model").rule,
            Some("model")
        );
    }

    #[test]
    fn unknown_query_falls_back() {
        let reply = Responder::default().respond("hello there");
        assert_eq!(reply.rule, None);
        assert_eq!(reply.text, FALLBACK_RESPONSE);
    }

    #[test]
    fn substring_inside_words_matches() {
        assert_eq!(Responder::default().respond("speedometer").rule, Some("speed"));
    }

    #[test]
    fn handle_appends_user_then_bot() {
        let responder = Responder::default();
        let mut transcript = Transcript::new();
        let queries = ["speed?", "model?", "who made this, developer?", "hi"];
        for q in queries {
            responder.handle(&mut transcript, q);
        }

        assert_eq!(transcript.len(), 2 * queries.len());
        for (i, pair) in transcript.turns().chunks(2).enumerate() {
            assert_eq!(pair[0].role(), Role::User);
            assert_eq!(pair[0].text(), queries[i]);
            assert_eq!(pair[1].role(), Role::Bot);
            assert_eq!(pair[1].text(), responder.respond(queries[i]).text);
        }
    }
}
