//! Presentation Shell.
//!
//! Pure functions from session state (plus the outcome of the current
//! action) to a complete HTML page. No state is read or written here
//! beyond what is passed in.

use motorspeed_core::{Role, FEATURES, FEATURE_MAX, FEATURE_MIN};

use crate::form::display_value;
use crate::session::{ActionOutcome, Session};

const PAGE_TITLE: &str = "Motor Speed Predictor";

const COMMUTATOR_IMAGE: &str = "https://st.depositphotos.com/16888564/57411/i/450/depositphotos_574113824-stock-photo-copper-commutator-bar-electric-motor.jpg";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #ffffff; color: #262730; }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 320px; background: #f0f2f6; padding: 1.5rem; box-sizing: border-box; }
.sidebar label { display: block; font-size: 0.85rem; margin: 0.75rem 0 0.25rem; }
.sidebar input { width: 100%; padding: 0.4rem; box-sizing: border-box; }
.main { flex: 1; background-color: #f8f9fa; padding: 20px 2rem; border-radius: 10px; box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1); }
.gate { max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
.gate input { display: block; width: 100%; padding: 0.5rem; margin-bottom: 1rem; box-sizing: border-box; }
.gate figure { margin: 1rem 0; }
.gate img { width: 100%; }
button { background-color: #007BFF; color: white; border-radius: 8px; padding: 10px 24px; border: none; cursor: pointer; }
button:hover { background-color: #0056b3; }
.success { background: #dff0d8; color: #1e4620; padding: 0.75rem 1rem; border-radius: 8px; margin: 1rem 0; }
.error { background: #f8d7da; color: #721c24; padding: 0.75rem 1rem; border-radius: 8px; margin: 1rem 0; }
.message { margin-bottom: 0.75rem; border-radius: 8px; padding: 0.75rem 1rem; }
.msg-user { background: #e8eef9; }
.msg-bot { background: #ffffff; border-left: 3px solid #007BFF; }
.role { font-weight: 700; font-size: 0.75rem; text-transform: uppercase; color: #6b7280; display: block; margin-bottom: 0.25rem; }
.content { white-space: pre-wrap; line-height: 1.6; }
.chat-input { display: flex; gap: 0.5rem; }
.chat-input input { flex: 1; padding: 0.5rem; }
.logout { margin-top: 2rem; }
"#;

/// Render the whole page for `session` after `outcome`.
pub fn page(session: &Session, outcome: &ActionOutcome) -> String {
    let body = if session.is_authenticated() {
        dashboard(session, outcome)
    } else {
        login_gate(outcome)
    };
    layout(&body)
}

fn layout(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{style}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = html_escape(PAGE_TITLE),
        style = STYLE,
        body = body,
    )
}

fn login_gate(outcome: &ActionOutcome) -> String {
    let error = match outcome {
        ActionOutcome::LoginFailed { .. } => {
            r#"<div class="error">❌ Invalid username or password.</div>"#
        }
        _ => "",
    };
    format!(
        r#"<div class="gate">
<h1>🔐 Login to Motor Speed Predictor</h1>
<form method="post" action="/login">
<label for="username">Username</label>
<input type="text" id="username" name="username" autocomplete="username">
<label for="password">Password</label>
<input type="password" id="password" name="password" autocomplete="current-password">
<button type="submit">Login</button>
</form>
{error}
<figure>
<img src="{image}" alt="Electric Motor Commutator">
<figcaption>Electric Motor Commutator</figcaption>
</figure>
</div>"#,
        error = error,
        image = COMMUTATOR_IMAGE,
    )
}

fn dashboard(session: &Session, outcome: &ActionOutcome) -> String {
    let notice = match outcome {
        ActionOutcome::LoginSucceeded => r#"<div class="success">✅ Login successful!</div>"#,
        _ => "",
    };
    format!(
        r#"<div class="layout">
<aside class="sidebar">
<h2>🔢 Input Parameters</h2>
{form}
</aside>
<main class="main">
{notice}
<h1>⚡ Electric Motor Speed Predictor</h1>
<h3>Welcome to the Electric Motor Speed Predictor!</h3>
<p>This tool uses a <strong>Random Forest Regression</strong> model to predict motor speed based on various input parameters.<br>
Simply enter the values below, and get instant predictions.</p>
<h3>🔢 Prediction Result</h3>
<button type="submit" form="predict-form">Predict Motor Speed</button>
{result}
<hr>
<h2>💬 Ask Me Anything (Chatbot)</h2>
{transcript}
<form method="post" action="/chat" class="chat-input">
<input type="text" name="message" placeholder="Type your question here..." autocomplete="off">
<button type="submit">Send</button>
</form>
<form method="post" action="/logout" class="logout">
<button type="submit">Logout{user}</button>
</form>
</main>
</div>"#,
        form = parameter_form(session),
        notice = notice,
        result = prediction_result(outcome),
        transcript = transcript(session),
        user = session
            .username()
            .map(|u| format!(" ({})", html_escape(u)))
            .unwrap_or_default(),
    )
}

fn parameter_form(session: &Session) -> String {
    let values = session.form().values();
    let inputs = FEATURES
        .iter()
        .zip(values)
        .map(|(field, value)| {
            format!(
                r#"<label for="{name}">{label} [Range: {min:.1} to {max:.1}]</label>
<input type="number" id="{name}" name="{name}" min="{min:.1}" max="{max:.1}" step="0.000001" value="{value}">"#,
                name = field.name,
                label = html_escape(field.label),
                min = FEATURE_MIN,
                max = FEATURE_MAX,
                value = display_value(value),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(r#"<form method="post" action="/predict" id="predict-form">{inputs}</form>"#)
}

fn prediction_result(outcome: &ActionOutcome) -> String {
    match outcome {
        ActionOutcome::Predicted(rpm) => format!(
            r#"<div class="success"><strong>Predicted Motor Speed:</strong> {rpm:.6} RPM</div>"#
        ),
        ActionOutcome::PredictionFailed(msg) => format!(
            r#"<div class="error">Prediction failed: {}</div>"#,
            html_escape(msg)
        ),
        _ => String::new(),
    }
}

fn transcript(session: &Session) -> String {
    session
        .transcript()
        .turns()
        .iter()
        .map(|turn| {
            let role_class = match turn.role() {
                Role::User => "msg-user",
                Role::Bot => "msg-bot",
            };
            format!(
                r#"<div class="message {rc}"><span class="role">{role}</span><div class="content">{content}</div></div>"#,
                rc = role_class,
                role = turn.role().as_str(),
                content = html_escape(turn.text()),
            )
        })
        .collect()
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
