//! Main HTTP Server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use motorspeed_chat::Responder;
use motorspeed_inference::InferenceAdapter;
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::auth::CredentialTable;
use crate::handlers;
use crate::health_api;
use crate::session::ActionContext;
use crate::session_reaper::spawn_session_reaper;
use crate::session_registry::SessionRegistry;

/// Application state shared across routes.
#[derive(Clone)]
pub struct GatewayState {
    pub registry: SessionRegistry,
    pub credentials: CredentialTable,
    pub adapter: Arc<InferenceAdapter>,
    pub responder: Responder,
    cookie_name: Arc<str>,
    started_at: Instant,
}

impl GatewayState {
    pub fn new(adapter: InferenceAdapter, cookie_name: &str) -> Self {
        Self {
            registry: SessionRegistry::new(),
            credentials: CredentialTable::default(),
            adapter: Arc::new(adapter),
            responder: Responder::default(),
            cookie_name: Arc::from(cookie_name),
            started_at: Instant::now(),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    pub fn context(&self) -> ActionContext<'_> {
        ActionContext {
            credentials: &self.credentials,
            adapter: &self.adapter,
            responder: &self.responder,
        }
    }
}

/// Listener and session sweep settings.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub addr: SocketAddr,
    pub idle_timeout: Duration,
    pub reap_interval: Duration,
}

/// Build the router with every page route and the health endpoint.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/login", post(handlers::login))
        .route("/predict", post(handlers::predict))
        .route("/chat", post(handlers::chat))
        .route("/logout", post(handlers::logout))
        .route("/api/health", get(health_api::get_health))
        .with_state(state)
}

/// Starts the HTTP server and the idle-session reaper; returns on Ctrl-C.
#[instrument(skip(state))]
pub async fn start_server(settings: ServerSettings, state: GatewayState) -> Result<()> {
    let reaper = spawn_session_reaper(
        state.registry.clone(),
        settings.idle_timeout,
        settings.reap_interval,
    );

    let app = build_router(state);

    info!("Motor speed predictor listening on http://{}", settings.addr);
    let listener = TcpListener::bind(&settings.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    reaper.abort();
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
