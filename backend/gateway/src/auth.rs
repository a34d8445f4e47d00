//! Credential Gate and session cookie extraction.

use std::convert::Infallible;
use std::fmt;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::server::GatewayState;

/// Username/password pairs accepted by the login form.
pub const BUILTIN_CREDENTIALS: &[(&str, &str)] = &[("admin", "password123"), ("user", "1234")];

/// Immutable table of plaintext credentials compiled into the binary.
#[derive(Clone, Copy)]
pub struct CredentialTable {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for CredentialTable {
    fn default() -> Self {
        Self::new(BUILTIN_CREDENTIALS)
    }
}

impl fmt::Debug for CredentialTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(user, _)| user))
            .finish()
    }
}

impl CredentialTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// The username is trimmed; the password must match exactly.
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        let username = username.trim();
        self.entries
            .iter()
            .any(|(user, pass)| *user == username && *pass == password)
    }
}

/// Value of the session cookie, if the browser sent one.
pub struct SessionCookie(pub Option<String>);

#[async_trait]
impl FromRequestParts<GatewayState> for SessionCookie {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &GatewayState,
    ) -> Result<Self, Self::Rejection> {
        let value = cookie_value(&parts.headers, state.cookie_name());
        if value.is_none() {
            debug!("Request carries no session cookie");
        }
        Ok(SessionCookie(value))
    }
}

/// Find `name` among every `Cookie` header.
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn accepts_known_pairs() {
        let table = CredentialTable::default();
        assert!(table.authenticate("admin", "password123"));
        assert!(table.authenticate("user", "1234"));
    }

    #[test]
    fn rejects_unknown_pairs() {
        let table = CredentialTable::default();
        for (user, pass) in [
            ("admin", "1234"),
            ("user", "password123"),
            ("root", "password123"),
            ("", ""),
            ("admin", ""),
            ("Admin", "password123"),
            ("admin", "PASSWORD123"),
        ] {
            assert!(!table.authenticate(user, pass), "{user}/{pass} accepted");
        }
    }

    #[test]
    fn username_is_trimmed_password_is_not() {
        let table = CredentialTable::default();
        assert!(table.authenticate("  admin\t", "password123"));
        assert!(!table.authenticate("admin", " password123"));
    }

    #[test]
    fn debug_hides_passwords() {
        let shown = format!("{:?}", CredentialTable::default());
        assert!(shown.contains("admin"));
        assert!(!shown.contains("password123"));
    }

    #[test]
    fn finds_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(
            header::COOKIE,
            HeaderValue::from_static("a=1; motorspeed_session=abc-123 ; b=2"),
        );
        assert_eq!(
            cookie_value(&headers, "motorspeed_session").as_deref(),
            Some("abc-123")
        );
        assert_eq!(cookie_value(&headers, "missing"), None);
    }

    #[test]
    fn empty_cookie_is_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("motorspeed_session="));
        assert_eq!(cookie_value(&headers, "motorspeed_session"), None);
    }
}
