//! Live Session Registry.
//!
//! Maps session cookies to their [`Session`]. Sessions never share state;
//! the map itself is the only thing behind the lock.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::session::{Session, SessionId};

/// Result of running a closure against a session.
#[derive(Debug)]
pub struct SessionAccess<R> {
    pub id: SessionId,
    /// A new session was stored and its cookie must be sent to the browser.
    pub issued: bool,
    pub value: R,
}

#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` on the session named by `cookie`.
    ///
    /// A missing or unknown cookie gets a fresh session, which is only
    /// stored if `f` leaves it non-pristine; page loads and failed logins
    /// from cookieless clients leave nothing behind.
    /// `f` runs under the write lock, so it must not block.
    pub async fn with_session<R>(
        &self,
        cookie: Option<&str>,
        f: impl FnOnce(&mut Session) -> R,
    ) -> SessionAccess<R> {
        let mut sessions = self.sessions.write().await;

        if let Some(session) = cookie.and_then(|id| sessions.get_mut(id)) {
            session.touch();
            let id = session.id().to_string();
            let value = f(session);
            return SessionAccess {
                id,
                issued: false,
                value,
            };
        }

        let mut session = Session::new(Uuid::new_v4().to_string());
        let value = f(&mut session);
        let id = session.id().to_string();
        let issued = !session.is_pristine();
        if issued {
            debug!(session = %id, "Issued new session");
            sessions.insert(id.clone(), session);
        }
        SessionAccess { id, issued, value }
    }

    /// Drop a session. Returns whether it existed.
    pub async fn end(&self, id: &str) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Remove sessions idle for longer than `max_idle`.
    /// Returns each removed id with its idle time in seconds.
    pub async fn reap_idle(&self, max_idle: Duration) -> Vec<(SessionId, i64)> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let expired: Vec<(SessionId, i64)> = sessions
            .values()
            .map(|s| (s.id().to_string(), now - s.last_seen()))
            .filter(|(_, idle)| *idle >= max_idle)
            .map(|(id, idle)| (id, idle.num_seconds()))
            .collect();
        for (id, _) in &expired {
            sessions.remove(id);
        }
        expired
    }
}
