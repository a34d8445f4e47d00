//! Per-browser session state and its transitions.
//!
//! Every request maps to exactly one [`UserAction`]; [`Session::apply`] is
//! the only place session state changes.

use std::fmt;

use chrono::{DateTime, Utc};
use motorspeed_chat::{Reply, Responder};
use motorspeed_core::{FeatureVector, Transcript};
use motorspeed_inference::InferenceAdapter;
use tracing::{debug, warn};

use crate::auth::CredentialTable;

pub type SessionId = String;

/// One user interaction.
pub enum UserAction {
    /// Plain page load; changes nothing.
    View,
    Login { username: String, password: String },
    Predict(FeatureVector),
    Chat(String),
}

impl fmt::Debug for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAction::View => write!(f, "View"),
            UserAction::Login { username, .. } => f
                .debug_struct("Login")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            UserAction::Predict(v) => f.debug_tuple("Predict").field(v).finish(),
            UserAction::Chat(q) => f.debug_tuple("Chat").field(q).finish(),
        }
    }
}

/// What an action did; drives the render that follows it.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Viewed,
    LoginSucceeded,
    LoginFailed { username: String },
    Predicted(f64),
    PredictionFailed(String),
    ChatAnswered { query: String, reply: Reply },
    /// Empty chat submission.
    ChatIgnored,
    /// Predict or chat before logging in.
    Rejected,
}

impl ActionOutcome {
    /// Chat submissions answer with a redirect, so a browser refresh
    /// re-issues a plain view instead of the message.
    pub fn redirects(&self) -> bool {
        matches!(
            self,
            ActionOutcome::ChatAnswered { .. } | ActionOutcome::ChatIgnored
        )
    }
}

/// Read-only collaborators an action may consult.
#[derive(Clone, Copy)]
pub struct ActionContext<'a> {
    pub credentials: &'a CredentialTable,
    pub adapter: &'a InferenceAdapter,
    pub responder: &'a Responder,
}

#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    authenticated: bool,
    username: Option<String>,
    transcript: Transcript,
    /// Last values submitted through the parameter form.
    form: FeatureVector,
    last_seen: DateTime<Utc>,
}

impl Session {
    pub fn new(id: impl Into<SessionId>) -> Self {
        Self {
            id: id.into(),
            authenticated: false,
            username: None,
            transcript: Transcript::new(),
            form: FeatureVector::default(),
            last_seen: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn form(&self) -> &FeatureVector {
        &self.form
    }

    /// Nothing has happened yet that is worth remembering.
    pub fn is_pristine(&self) -> bool {
        !self.authenticated && self.transcript.is_empty() && self.form == FeatureVector::default()
    }

    pub fn last_seen(&self) -> DateTime<Utc> {
        self.last_seen
    }

    pub(crate) fn touch(&mut self) {
        self.last_seen = Utc::now();
    }

    /// Apply one action. Unauthenticated sessions may only view and log in.
    pub fn apply(&mut self, action: UserAction, ctx: &ActionContext<'_>) -> ActionOutcome {
        debug!(session = %self.id, ?action, "Applying action");
        match action {
            UserAction::View => ActionOutcome::Viewed,

            UserAction::Login { .. } if self.authenticated => ActionOutcome::Viewed,
            UserAction::Login { username, password } => {
                if ctx.credentials.authenticate(&username, &password) {
                    self.authenticated = true;
                    self.username = Some(username.trim().to_string());
                    ActionOutcome::LoginSucceeded
                } else {
                    ActionOutcome::LoginFailed { username }
                }
            }

            UserAction::Predict(_) | UserAction::Chat(_) if !self.authenticated => {
                ActionOutcome::Rejected
            }

            UserAction::Predict(vector) => {
                self.form = vector;
                match ctx.adapter.predict(&vector) {
                    Ok(rpm) => ActionOutcome::Predicted(rpm),
                    Err(e) => {
                        warn!(session = %self.id, error = %e, "Prediction failed");
                        ActionOutcome::PredictionFailed(e.to_string())
                    }
                }
            }

            UserAction::Chat(query) => {
                if query.trim().is_empty() {
                    return ActionOutcome::ChatIgnored;
                }
                let reply = ctx.responder.handle(&mut self.transcript, &query);
                ActionOutcome::ChatAnswered { query, reply }
            }
        }
    }
}
