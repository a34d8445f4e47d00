//! Append-only chat transcript.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Bot => "bot",
        }
    }
}

/// One chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatTurn {
    role: Role,
    text: String,
}

impl ChatTurn {
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Ordered chat log of one session.
///
/// Turns can only be appended, in user/bot pairs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user query followed by the bot's reply.
    pub fn push_exchange(&mut self, query: impl Into<String>, reply: impl Into<String>) {
        self.turns.push(ChatTurn {
            role: Role::User,
            text: query.into(),
        });
        self.turns.push(ChatTurn {
            role: Role::Bot,
            text: reply.into(),
        });
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchanges_alternate_user_then_bot() {
        let mut t = Transcript::new();
        t.push_exchange("hi", "hello");
        t.push_exchange("speed?", "fast");

        let roles: Vec<_> = t.turns().iter().map(|turn| turn.role()).collect();
        assert_eq!(roles, vec![Role::User, Role::Bot, Role::User, Role::Bot]);
        assert_eq!(t.turns()[2].text(), "speed?");
        assert_eq!(t.len(), 4);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Bot).unwrap(), "\"bot\"");
        assert_eq!(Role::User.as_str(), "user");
    }
}
