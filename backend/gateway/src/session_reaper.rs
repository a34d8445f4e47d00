//! Session reaper: drops sessions whose browser has gone quiet.

use std::time::Duration;

use motorspeed_logging::{EventLogger, SessionEvent};
use tokio::task::JoinHandle;
use tracing::info;

use crate::session_registry::SessionRegistry;

/// Sweep `registry` every `interval`, removing sessions idle past `idle_timeout`.
pub fn spawn_session_reaper(
    registry: SessionRegistry,
    idle_timeout: Duration,
    interval: Duration,
) -> JoinHandle<()> {
    let max_idle = chrono::Duration::from_std(idle_timeout).unwrap_or(chrono::Duration::MAX);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let reaped = registry.reap_idle(max_idle).await;
            if reaped.is_empty() {
                continue;
            }
            for (id, idle_secs) in &reaped {
                EventLogger::log_event(id, SessionEvent::SessionReaped { idle_secs: *idle_secs });
            }
            info!("[SessionReaper] Reaped {} idle sessions", reaped.len());
        }
    })
}
