//! `motorspeed status`: asks a running server for its health report.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use anyhow::Result;
use motorspeed_config::MotorSpeedConfig;

/// Health endpoint of a server started with `config`. Wildcard binds are
/// reached over loopback of the same family.
fn health_url(config: &MotorSpeedConfig) -> String {
    let host = match config.bind_address().parse::<IpAddr>() {
        Ok(IpAddr::V4(ip)) if ip.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
        Ok(IpAddr::V6(ip)) if ip.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
        Ok(ip) => ip,
        Err(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
    };
    let host = match host {
        IpAddr::V4(ip) => ip.to_string(),
        IpAddr::V6(ip) => format!("[{ip}]"),
    };
    format!("http://{host}:{}/api/health", config.port())
}

pub async fn run(config: &MotorSpeedConfig) -> Result<()> {
    let url = health_url(config);

    let client = reqwest::Client::new();
    match client.get(&url).send().await {
        Ok(resp) => {
            let body: serde_json::Value = resp.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Err(_) => {
            println!("Motor speed predictor is not running at {url}");
        }
    }
    Ok(())
}
