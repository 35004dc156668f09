// Configuration module entry point
// Loads host configuration from config.toml, environment, and defaults

mod types;

use std::net::SocketAddr;

// Re-export public types
pub use types::{ActionConfig, Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

impl Config {
    /// Load configuration from the default `config.toml`.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("HOST"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("action.kind", "assets")?
            .set_default("action.bundle_dir", "bundle")?
            .set_default("action.welcome_url", "https://welcome.nuvolaris.io/nuv/")?
            .set_default("action.welcome_fallback", "Welcome to Nuvolaris!!")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "plain")?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;

        // The platform injects these into every action container; explicit
        // configuration wins over them.
        if cfg.action.name.is_none() {
            cfg.action.name = std::env::var("__OW_ACTION_NAME").ok();
        }
        if cfg.action.api_host.is_none() {
            cfg.action.api_host = std::env::var("__OW_API_HOST").ok();
        }

        Ok(cfg)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionKind;

    #[test]
    fn test_defaults() {
        let cfg = Config::load_from("nonexistent-config").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.action.kind, ActionKind::Assets);
        assert_eq!(cfg.action.bundle_dir, "bundle");
        assert_eq!(cfg.http.max_body_size, 1_048_576);
        assert_eq!(cfg.logging.access_log_format, "plain");
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::load_from("nonexistent-config").unwrap();
        assert_eq!(cfg.socket_addr().unwrap().port(), 8080);
    }
}
