//! Logger module
//!
//! Logging for the action host:
//! - Host lifecycle logging
//! - Per-activation logging (plain or json)
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::ActivationLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/activation log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Action host started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Action kind: {}", config.action.kind.label()));
    if let Some(ref name) = config.action.name {
        write_info(&format!("Action name: {name}"));
    }
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Activation log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_init(action_name: Option<&str>) {
    write_info(&format!(
        "[Init] Initialized (code compiled in), declared name: {}",
        action_name.unwrap_or("-")
    ));
}

/// Log a completed activation
pub fn log_activation(entry: &ActivationLogEntry, format: &str) {
    write_info(&entry.format(format));
}
