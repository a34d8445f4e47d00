//! Log Redaction Layer
//!
//! Scrubs password assignments and bearer tokens from free text (chat
//! queries, submitted usernames) before it is logged.

use regex::Regex;
use std::sync::LazyLock;

static PASSWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(password|passwd|pwd|pass)(\s*(?:[=:]|\bis\b)\s*)\S+")
        .expect("password pattern is valid")
});
static BEARER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Bearer\s+[a-zA-Z0-9\-\._~+/]+=*").expect("bearer pattern is valid")
});

/// Redacts sensitive patterns in a string.
pub fn redact_sensitive_data(input: &str) -> String {
    let redacted = PASSWORD_RE.replace_all(input, "${1}${2}[REDACTED]");
    BEARER_RE
        .replace_all(&redacted, "[REDACTED_TOKEN]")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_password_assignments() {
        let clean = redact_sensitive_data("my password is hunter2, pwd=abc123");
        assert!(!clean.contains("hunter2"));
        assert!(!clean.contains("abc123"));
        assert!(clean.contains("password is [REDACTED]"));
    }

    #[test]
    fn masks_bearer_tokens() {
        let clean = redact_sensitive_data("use Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9 now");
        assert_eq!(clean, "use [REDACTED_TOKEN] now");
    }

    #[test]
    fn leaves_ordinary_questions_alone() {
        let q = "What speed model do you use?";
        assert_eq!(redact_sensitive_data(q), q);
    }
}
