// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Listen address; a bare ":port" form binds all IPv4 interfaces
    pub addr: String,
    /// Runtime worker threads (defaults to CPU cores when unset)
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// Line format: "text" (key=value) or "json"
    pub format: String,
    /// Emit one line per completed request
    pub access_log: bool,
    /// Info/access log file path (stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Warning/error log file path (stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            access_log: true,
            access_log_file: None,
            error_log_file: None,
        }
    }
}

/// Page and asset directories
#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    /// Directory holding the base layout, partials, and page templates
    pub template_dir: String,
    /// Directory served under the static asset route
    pub static_dir: String,
}
