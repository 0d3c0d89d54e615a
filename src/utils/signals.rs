//! Signal handling for graceful shutdown

use futures::stream::StreamExt;
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use signal_hook_tokio::Signals;
use tracing::info;

/// Register handlers for SIGTERM, SIGINT and SIGHUP
pub fn install_shutdown_signals() -> Result<Signals, String> {
    Signals::new([SIGTERM, SIGINT, SIGHUP])
        .map_err(|e| format!("Failed to create signal handler: {}", e))
}

/// Wait for the first shutdown signal and return its number
pub async fn shutdown_signal(mut signals: Signals) -> Option<i32> {
    let signal = signals.next().await;
    if let Some(signal) = signal {
        info!("Received signal: {}", signal);
    }
    signals.handle().close();
    signal
}
