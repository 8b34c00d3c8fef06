//! Server module
//!
//! Listener creation and the accept loop.

pub mod connection;
pub mod listener;

pub use listener::bind_listener;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::AppState;

/// Accept connections until the process is terminated.
///
/// Accept failures are logged and the loop continues; a single bad
/// connection attempt must not take the server down.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                connection::accept_connection(stream, peer_addr, &state);
            }
            Err(err) => {
                state
                    .logger
                    .error("failed to accept connection", &[("err", err.to_string())]);
            }
        }
    }
}
