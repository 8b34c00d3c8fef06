//! snippetd: a minimal snippet web server skeleton.
//!
//! Wires up the runtime configuration, the injected logger, the route
//! table, and the HTTP server loop. The handlers themselves are
//! placeholders; everything interesting here is the wiring.

use std::process;
use std::sync::Arc;

use clap::Parser;

use crate::config::{AppState, Config};
use crate::logger::Logger;

mod config;
mod handler;
mod http;
mod logger;
mod routing;
mod server;
mod template;

/// Minimal snippet web server skeleton
#[derive(Debug, Parser)]
#[command(name = "snippetd", version, about = "Minimal snippet web server skeleton")]
struct Cli {
    /// HTTP network address, e.g. ":4000" or "127.0.0.1:4000" [default: :4000]
    #[arg(long)]
    addr: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    // Parse runtime configuration before anything else; without it there
    // is no logger to report through.
    let cfg = match Config::load(cli.addr.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("snippetd: failed to load configuration: {err}");
            process::exit(1);
        }
    };

    let log = match Logger::new(&cfg.logging) {
        Ok(log) => log,
        Err(err) => {
            eprintln!("snippetd: failed to initialize logger: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = run(cfg, &log) {
        log.error("server error", &[("err", err.to_string())]);
        process::exit(1);
    }
}

/// Establish the handler dependencies and run the HTTP server.
fn run(cfg: Config, log: &Logger) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.socket_addr()?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    let state = Arc::new(AppState::new(cfg, log.clone())?);

    runtime.block_on(async move {
        let listener = server::bind_listener(addr)?;
        state
            .logger
            .info("starting server", &[("addr", addr.to_string())]);
        server::serve(listener, state).await
    })
}
