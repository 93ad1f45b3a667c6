// Server loop module
// Accepts connections until an external shutdown signal arrives

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop until `shutdown` fires.
///
/// Accept errors are logged and the loop keeps going; only the shutdown
/// signal ends it. Returns Ok so a signal-driven exit maps to status 0.
#[allow(clippy::ignored_unit_patterns)]
pub async fn run(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                logger::log_shutdown("signal received");
                break;
            }
        }
    }

    Ok(())
}
