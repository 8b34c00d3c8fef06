//! Log line formatting module
//!
//! Renders log records as structured key/value text lines or as JSON.

use chrono::{DateTime, Local, SecondsFormat};

/// Log severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Parse a level name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `ts=... level=... msg=... key=value ...`
    Text,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Render a complete log line in the given format, without a trailing newline.
pub fn format_line(
    format: LogFormat,
    time: &DateTime<Local>,
    level: Level,
    msg: &str,
    attrs: &[(&str, String)],
) -> String {
    match format {
        LogFormat::Text => format_text(time, level, msg, attrs),
        LogFormat::Json => format_json(time, level, msg, attrs),
    }
}

fn format_text(
    time: &DateTime<Local>,
    level: Level,
    msg: &str,
    attrs: &[(&str, String)],
) -> String {
    let mut line = format!(
        "ts={} level={} msg={}",
        time.to_rfc3339_opts(SecondsFormat::Millis, true),
        level,
        quote_value(msg)
    );
    for (key, value) in attrs {
        line.push(' ');
        line.push_str(key);
        line.push('=');
        line.push_str(&quote_value(value));
    }
    line
}

fn format_json(
    time: &DateTime<Local>,
    level: Level,
    msg: &str,
    attrs: &[(&str, String)],
) -> String {
    let mut object = serde_json::Map::new();
    object.insert(
        "ts".to_string(),
        serde_json::Value::from(time.to_rfc3339_opts(SecondsFormat::Millis, true)),
    );
    object.insert("level".to_string(), serde_json::Value::from(level.as_str()));
    object.insert("msg".to_string(), serde_json::Value::from(msg));
    for (key, value) in attrs {
        object.insert((*key).to_string(), serde_json::Value::from(value.as_str()));
    }
    serde_json::Value::Object(object).to_string()
}

/// Quote a value if it would be ambiguous in key=value form.
fn quote_value(value: &str) -> String {
    let needs_quoting = value.is_empty()
        || value
            .chars()
            .any(|c| c == ' ' || c == '"' || c == '=' || c.is_control());
    if needs_quoting {
        let escaped = value
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n");
        format!("\"{escaped}\"")
    } else {
        value.to_string()
    }
}

/// Access log record for a single completed request.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client socket address
    pub remote_addr: String,
    /// HTTP method (GET, POST, ...)
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Query string (without leading ?)
    pub query: Option<String>,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: u64,
    /// Request processing time in microseconds
    pub duration_us: u128,
}

impl AccessLogEntry {
    /// Flatten into attribute pairs for a structured log line.
    pub fn attrs(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("remote_addr", self.remote_addr.clone()),
            ("method", self.method.clone()),
            ("path", self.path.clone()),
        ];
        if let Some(query) = &self.query {
            attrs.push(("query", query.clone()));
        }
        attrs.push(("status", self.status.to_string()));
        attrs.push(("body_bytes", self.body_bytes.to_string()));
        attrs.push(("duration_us", self.duration_us.to_string()));
        attrs
    }
}
