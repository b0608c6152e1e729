//! Graceful shutdown with a bounded drain

use std::{future::Future, time::Duration};

use tokio::{signal, sync::watch};
use tracing::{error, info, warn};

/// Run `server` until it finishes, or until `limit` has passed since
/// `triggered` flipped to `true`
///
/// Returns `None` when open connections were still draining at the deadline.
pub async fn drain_within<F>(
    server: F,
    triggered: watch::Receiver<bool>,
    limit: Duration,
) -> Option<F::Output>
where
    F: Future,
{
    tokio::select! {
        output = server => Some(output),
        () = deadline_after_trigger(triggered, limit) => {
            warn!(?limit, "Connections still open at shutdown deadline, dropping them");
            None
        }
    }
}

async fn deadline_after_trigger(mut triggered: watch::Receiver<bool>, limit: Duration) {
    if triggered.wait_for(|fired| *fired).await.is_err() {
        // Sender gone without a signal: no deadline
        std::future::pending::<()>().await;
    }
    info!("⏳ Waiting up to {:?} for connections to close...", limit);
    tokio::time::sleep(limit).await;
}

/// Wait for SIGINT or SIGTERM, then flip `trigger`
pub async fn shutdown_signal(trigger: watch::Sender<bool>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    let _ = trigger.send_replace(true);
}
