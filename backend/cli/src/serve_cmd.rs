//! `motorspeed serve`

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use motorspeed_config::MotorSpeedConfig;
use motorspeed_gateway::{start_server, GatewayState, ServerSettings};
use motorspeed_inference::InferenceAdapter;
use tracing::{error, info};

pub async fn run(config: MotorSpeedConfig, port: Option<u16>, bind: Option<String>) -> Result<()> {
    let bind = bind.unwrap_or_else(|| config.bind_address().to_string());
    let addr = listen_addr(&bind, port.unwrap_or(config.port()))?;

    let scaler_path = config.scaler_path();
    let model_path = config.model_path();
    info!(
        scaler = %scaler_path.display(),
        model = %model_path.display(),
        "Starting motor speed predictor"
    );

    // Without both artifacts nothing can be served.
    let adapter = match InferenceAdapter::load(&scaler_path, &model_path).await {
        Ok(adapter) => adapter,
        Err(e) => {
            error!(error = %e, "Model artifacts failed to load");
            return Err(e).context("Cannot start without the scaler and model artifacts");
        }
    };

    let state = GatewayState::new(adapter, config.cookie_name());
    let settings = ServerSettings {
        addr,
        idle_timeout: Duration::from_secs(config.idle_timeout_secs()),
        reap_interval: Duration::from_secs(config.reap_interval_secs()),
    };
    start_server(settings, state).await
}

/// Listen address from an IPv4 or IPv6 bind address.
fn listen_addr(bind: &str, port: u16) -> Result<SocketAddr> {
    let ip: IpAddr = bind
        .trim()
        .parse()
        .with_context(|| format!("Invalid bind address '{bind}'"))?;
    Ok(SocketAddr::new(ip, port))
}
