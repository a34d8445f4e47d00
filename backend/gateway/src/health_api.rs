//! Gateway Health API

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::server::GatewayState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub active_sessions: usize,
    pub model_trees: usize,
    pub timestamp: DateTime<Utc>,
}

/// Handler for `GET /api/health`
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        uptime_seconds: state.uptime().as_secs(),
        active_sessions: state.registry.len().await,
        model_trees: state.adapter.n_trees(),
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{logged_in_session, test_state};

    #[tokio::test]
    async fn reports_sessions_and_model() {
        let state = test_state();
        logged_in_session(&state.registry).await;
        let Json(report) = get_health(State(state)).await;
        assert_eq!(report.status, "ok");
        assert_eq!(report.active_sessions, 1);
        assert_eq!(report.model_trees, 1);
    }

    #[tokio::test]
    async fn serializes_with_snake_case_keys() {
        let Json(report) = get_health(State(test_state())).await;
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["active_sessions"], 0);
        assert!(value["uptime_seconds"].is_u64());
        assert!(value["timestamp"].is_string());
    }
}
