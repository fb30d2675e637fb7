use std::time::Duration;

use actix_web::dev::ServerHandle;
use tokio::time::timeout;
use tracing::{error, info, warn};

use crate::storage::SeaOrmStorage;

/// 关闭超时时间（秒）
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Resolve on Ctrl+C, or SIGTERM on Unix.
pub async fn wait_for_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Ctrl+C received"),
        _ = terminate => info!("SIGTERM received"),
    }
}

/// Wait for a signal, stop accepting connections, drain in-flight requests
/// and close the pool.
pub async fn listen_for_shutdown(handle: ServerHandle, storage: &SeaOrmStorage) {
    wait_for_signal().await;
    info!("Shutdown signal received, draining requests...");

    let result = timeout(Duration::from_secs(SHUTDOWN_TIMEOUT_SECS), async {
        handle.stop(true).await;
        storage.close().await;
    })
    .await;

    match result {
        Ok(()) => info!("All shutdown tasks completed successfully"),
        Err(_) => error!(
            "Shutdown tasks timed out after {} seconds",
            SHUTDOWN_TIMEOUT_SECS
        ),
    }
}
