// Configuration module entry point
// Layered configuration: defaults, optional TOML file, environment, CLI override

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, ServerConfig, UiConfig};

impl Config {
    /// Load configuration from `snippetd.toml` (optional) and `SNIPPETD_*`
    /// environment variables, over built-in defaults. The CLI listen-address
    /// flag, when given, overrides every other layer.
    pub fn load(addr_override: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("snippetd").required(false))
            .add_source(config::Environment::with_prefix("SNIPPETD").separator("__"))
            .set_default("server.addr", ":4000")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "text")?
            .set_default("logging.access_log", true)?
            .set_default("ui.template_dir", "./ui/html")?
            .set_default("ui.static_dir", "./ui/static")?;

        if let Some(addr) = addr_override {
            builder = builder.set_override("server.addr", addr)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Resolve the configured listen address into a socket address.
    /// A bare ":4000" form binds all IPv4 interfaces.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        let addr = &self.server.addr;
        let full = if addr.starts_with(':') {
            format!("0.0.0.0{addr}")
        } else {
            addr.clone()
        };
        full.parse()
            .map_err(|e| format!("invalid listen address '{addr}': {e}"))
    }
}
