//! Route handlers. Each one turns a request into a [`UserAction`], applies
//! it to the caller's session, and answers with the rendered page.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use motorspeed_logging::{EventLogger, SessionEvent};
use serde::Deserialize;

use crate::auth::SessionCookie;
use crate::form::FeatureForm;
use crate::render;
use crate::server::GatewayState;
use crate::session::{ActionOutcome, UserAction};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChatForm {
    pub message: String,
}

/// Handler for `GET /`.
pub async fn index(State(state): State<GatewayState>, SessionCookie(cookie): SessionCookie) -> Response {
    dispatch(&state, cookie, UserAction::View).await
}

/// Handler for `POST /login`.
pub async fn login(
    State(state): State<GatewayState>,
    SessionCookie(cookie): SessionCookie,
    Form(form): Form<LoginForm>,
) -> Response {
    let action = UserAction::Login {
        username: form.username,
        password: form.password,
    };
    dispatch(&state, cookie, action).await
}

/// Handler for `POST /predict`.
pub async fn predict(
    State(state): State<GatewayState>,
    SessionCookie(cookie): SessionCookie,
    Form(form): Form<FeatureForm>,
) -> Response {
    dispatch(&state, cookie, UserAction::Predict(form.to_vector())).await
}

/// Handler for `POST /chat`.
pub async fn chat(
    State(state): State<GatewayState>,
    SessionCookie(cookie): SessionCookie,
    Form(form): Form<ChatForm>,
) -> Response {
    dispatch(&state, cookie, UserAction::Chat(form.message)).await
}

/// Handler for `POST /logout`. Destroys the session and clears the cookie.
pub async fn logout(State(state): State<GatewayState>, SessionCookie(cookie): SessionCookie) -> Response {
    if let Some(id) = cookie {
        if state.registry.end(&id).await {
            EventLogger::log_event(&id, SessionEvent::SessionEnded);
        }
    }
    let clear = format!(
        "{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax",
        state.cookie_name()
    );
    ([(header::SET_COOKIE, clear)], Redirect::to("/")).into_response()
}

async fn dispatch(state: &GatewayState, cookie: Option<String>, action: UserAction) -> Response {
    let ctx = state.context();
    let access = state
        .registry
        .with_session(cookie.as_deref(), |session| {
            let outcome = session.apply(action, &ctx);
            let html = (!outcome.redirects()).then(|| render::page(session, &outcome));
            (outcome, session.username().map(str::to_owned), html)
        })
        .await;
    let (outcome, username, html) = access.value;

    log_outcome(&access.id, username.as_deref(), &outcome);

    let status = match outcome {
        ActionOutcome::Rejected | ActionOutcome::LoginFailed { .. } => StatusCode::UNAUTHORIZED,
        _ => StatusCode::OK,
    };
    let mut response = match html {
        Some(html) => (status, Html(html)).into_response(),
        None => Redirect::to("/").into_response(),
    };

    if access.issued {
        let cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            state.cookie_name(),
            access.id
        );
        if let Ok(value) = cookie.parse() {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}

fn log_outcome(session_id: &str, username: Option<&str>, outcome: &ActionOutcome) {
    let event = match outcome {
        ActionOutcome::LoginSucceeded => SessionEvent::LoginSucceeded {
            username: username.unwrap_or_default().to_string(),
        },
        ActionOutcome::LoginFailed { username } => SessionEvent::LoginFailed {
            username: username.clone(),
        },
        ActionOutcome::Predicted(rpm) => SessionEvent::Prediction { rpm: *rpm },
        ActionOutcome::PredictionFailed(msg) => SessionEvent::PredictionFailed {
            error_msg: msg.clone(),
        },
        ActionOutcome::ChatAnswered { query, reply } => SessionEvent::ChatExchange {
            query: query.clone(),
            rule: reply.rule.map(str::to_owned),
        },
        ActionOutcome::Viewed | ActionOutcome::ChatIgnored | ActionOutcome::Rejected => return,
    };
    EventLogger::log_event(session_id, event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_state, TestDeps};

    async fn body(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn issued_cookie(response: &Response) -> String {
        let raw = response
            .headers()
            .get(header::SET_COOKIE)
            .expect("session cookie issued")
            .to_str()
            .unwrap();
        let pair = raw.split(';').next().unwrap();
        pair.split_once('=').unwrap().1.to_string()
    }

    async fn logged_in_cookie(state: &GatewayState) -> String {
        let response = login(
            State(state.clone()),
            SessionCookie(None),
            Form(LoginForm {
                username: "admin".into(),
                password: "password123".into(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        issued_cookie(&response)
    }

    #[tokio::test]
    async fn first_visit_shows_gate_without_a_session() {
        let state = test_state();
        for _ in 0..3 {
            let response = index(State(state.clone()), SessionCookie(None)).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert!(response.headers().get(header::SET_COOKIE).is_none());
            assert!(body(response).await.contains("Login to Motor Speed Predictor"));
        }
        assert!(state.registry.is_empty().await);
    }

    #[tokio::test]
    async fn successful_login_issues_cookie() {
        let state = test_state();
        let response = login(
            State(state.clone()),
            SessionCookie(None),
            Form(LoginForm {
                username: "admin".into(),
                password: "password123".into(),
            }),
        )
        .await;
        let raw = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
        assert!(raw.starts_with("motorspeed_session="));
        assert!(raw.contains("HttpOnly"));
        assert!(raw.contains("SameSite=Lax"));
        assert!(body(response).await.contains("Login successful!"));
        assert_eq!(state.registry.len().await, 1);
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let state = test_state();
        let response = login(
            State(state.clone()),
            SessionCookie(None),
            Form(LoginForm {
                username: "admin".into(),
                password: "nope".into(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert!(body(response).await.contains("Invalid username or password."));
        assert!(state.registry.is_empty().await);
    }

    #[tokio::test]
    async fn predict_before_login_is_rejected() {
        let state = test_state();
        let response = predict(
            State(state),
            SessionCookie(None),
            Form(FeatureForm::default()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let html = body(response).await;
        assert!(html.contains("Login to Motor Speed Predictor"));
        assert!(!html.contains("Predicted Motor Speed"));
    }

    #[tokio::test]
    async fn login_predict_chat_flow() {
        let state = test_state();
        let cookie = logged_in_cookie(&state).await;

        let response = predict(
            State(state.clone()),
            SessionCookie(Some(cookie.clone())),
            Form(FeatureForm {
                torque: Some("7".into()),
                ..Default::default()
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let html = body(response).await;
        assert!(html.contains(&format!("{:.6} RPM", TestDeps::PREDICTION)));
        assert!(html.contains(r#"id="torque" name="torque" min="-3.0" max="2.0" step="0.000001" value="2.000000""#));

        let response = chat(
            State(state.clone()),
            SessionCookie(Some(cookie.clone())),
            Form(ChatForm {
                message: "who is the developer?".into(),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

        // The follow-up view shows the exchange but no prediction.
        let html = body(index(State(state.clone()), SessionCookie(Some(cookie.clone()))).await).await;
        assert!(html.contains("who is the developer?"));
        assert!(html.contains("This tool was developed using Rust and axum."));
        assert!(!html.contains("Predicted Motor Speed"));

        let turns = state
            .registry
            .with_session(Some(&cookie), |s| s.transcript().len())
            .await;
        assert_eq!(turns.value, 2);
    }

    #[tokio::test]
    async fn views_and_predictions_never_grow_transcript() {
        let state = test_state();
        let cookie = logged_in_cookie(&state).await;
        chat(
            State(state.clone()),
            SessionCookie(Some(cookie.clone())),
            Form(ChatForm {
                message: "speed".into(),
            }),
        )
        .await;

        for _ in 0..3 {
            index(State(state.clone()), SessionCookie(Some(cookie.clone()))).await;
            predict(
                State(state.clone()),
                SessionCookie(Some(cookie.clone())),
                Form(FeatureForm::default()),
            )
            .await;
        }

        let turns = state
            .registry
            .with_session(Some(&cookie), |s| s.transcript().len())
            .await;
        assert_eq!(turns.value, 2);
    }

    #[tokio::test]
    async fn logout_destroys_session() {
        let state = test_state();
        let cookie = logged_in_cookie(&state).await;

        let response = logout(State(state.clone()), SessionCookie(Some(cookie.clone()))).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let raw = response.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
        assert!(raw.contains("Max-Age=0"));
        assert!(state.registry.is_empty().await);

        // The stale cookie now sees the gate of a fresh, logged-out session.
        let response = index(State(state.clone()), SessionCookie(Some(cookie.clone()))).await;
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert!(body(response).await.contains("Login to Motor Speed Predictor"));
        assert!(state.registry.is_empty().await);
    }
}
