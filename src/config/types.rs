// Configuration types module
// Defines all configuration-related data structures

use crate::actions::ActionKind;
use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub action: ActionConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Action configuration
///
/// `name` and `api_host` default to the platform-injected
/// `__OW_ACTION_NAME` / `__OW_API_HOST` environment variables when unset;
/// the run payload's activation metadata overrides both per request.
#[derive(Debug, Deserialize, Clone)]
pub struct ActionConfig {
    /// Which compiled-in action this host serves.
    pub kind: ActionKind,
    /// Fully-qualified action name (`namespace/package/action`).
    #[serde(default)]
    pub name: Option<String>,
    /// Platform API host.
    #[serde(default)]
    pub api_host: Option<String>,
    /// Directory the asset responder serves from.
    pub bundle_dir: String,
    /// Remote endpoint the welcome action relays from.
    pub welcome_url: String,
    /// Body returned when the welcome fetch fails.
    pub welcome_fallback: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Activation log format (`plain` or `json`)
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub max_body_size: u64,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}
