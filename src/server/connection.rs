// Connection handling module
// Serves one accepted TCP connection on a spawned task

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler;

/// Accept a connection and hand it off to its own task.
pub fn accept_connection(stream: TcpStream, peer_addr: SocketAddr, state: &Arc<AppState>) {
    state
        .logger
        .debug("connection accepted", &[("peer", peer_addr.to_string())]);
    handle_connection(stream, peer_addr, Arc::clone(state));
}

/// Serve HTTP/1.1 on the connection until the peer is done.
///
/// One spawned task per connection; hyper drives the request/response
/// exchanges on it. Handler code holds no locks, so there is nothing to
/// coordinate beyond what the runtime already provides.
fn handle_connection(stream: TcpStream, peer_addr: SocketAddr, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service_state = Arc::clone(&state);
        let service = service_fn(move |req| {
            let state = Arc::clone(&service_state);
            async move { handler::handle_request(req, state, peer_addr).await }
        });

        let mut builder = http1::Builder::new();
        builder.keep_alive(true);

        if let Err(err) = builder.serve_connection(io, service).await {
            state.logger.error(
                "failed to serve connection",
                &[
                    ("peer", peer_addr.to_string()),
                    ("err", format!("{err:?}")),
                ],
            );
        }
    });
}
