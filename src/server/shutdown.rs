// Signal handling module
//
// Supported signals:
// - SIGTERM: graceful shutdown
// - SIGINT:  graceful shutdown (Ctrl+C)
//
// Termination by signal is the normal way this process stops; it exits
// with status 0.

use std::sync::Arc;
use tokio::sync::Notify;

/// Start the signal listener task (Unix)
///
/// Spawns a background task that waits for SIGTERM or SIGINT and fires
/// the shutdown notification.
#[cfg(unix)]
pub fn spawn_signal_listener(shutdown: Arc<Notify>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }

        shutdown.notify_waiters();
    });
}

/// Non-Unix fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn spawn_signal_listener(shutdown: Arc<Notify>) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.notify_waiters();
        }
    });
}
