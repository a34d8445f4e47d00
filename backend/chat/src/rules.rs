/// One canned answer and the phrases that trigger it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatRule {
    pub name: &'static str,
    /// Lowercase substrings; any one of them selects the rule.
    pub triggers: &'static [&'static str],
    pub response: &'static str,
}

/// Checked in order; the first matching rule answers.
pub const BUILTIN_RULES: &[ChatRule] = &[
    ChatRule {
        name: "speed",
        triggers: &["speed"],
        response: "This app predicts motor speed based on input parameters like temperature, torque, and voltage.",
    },
    ChatRule {
        name: "model",
        triggers: &["model"],
        response: "We use a Random Forest Regression model trained on electric motor sensor data.",
    },
    ChatRule {
        name: "attribution",
        triggers: &["creator", "developer"],
        response: "This tool was developed using Rust and axum.",
    },
];

pub const FALLBACK_RESPONSE: &str =
    "I'm just a simple chatbot 🤖. I can answer basic questions about the app!";

impl ChatRule {
    /// `lowered` must already be lowercase.
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t))
    }
}
