//! Activation log formatting
//!
//! One line per completed invocation, in `plain` or `json` form.

use chrono::Local;

/// A completed activation, ready to be logged
#[derive(Debug, Clone)]
pub struct ActivationLogEntry {
    /// Completion timestamp
    pub time: chrono::DateTime<Local>,
    /// Action kind label (assets, welcome, form)
    pub action: String,
    /// Platform activation id, when the run payload carried one
    pub activation_id: Option<String>,
    /// Requested web path, when invoked through the web
    pub path: Option<String>,
    /// Envelope status code (absent for body-only responses)
    pub status: Option<u16>,
    /// Envelope body size in bytes
    pub body_bytes: usize,
    /// Invocation processing time in microseconds
    pub duration_us: u64,
}

impl ActivationLogEntry {
    pub fn new(action: &str, body_bytes: usize, duration_us: u64) -> Self {
        Self {
            time: Local::now(),
            action: action.to_string(),
            activation_id: None,
            path: None,
            status: None,
            body_bytes,
            duration_us,
        }
    }

    /// Format the entry according to the configured format
    pub fn format(&self, format: &str) -> String {
        match format {
            "json" => self.format_json(),
            _ => self.format_plain(),
        }
    }

    /// `[time] action activation_id path status bytes duration`
    fn format_plain(&self) -> String {
        format!(
            "[{}] {} {} {} {} {}B {}us",
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.action,
            self.activation_id.as_deref().unwrap_or("-"),
            self.path.as_deref().unwrap_or("-"),
            self.status.map_or_else(|| "-".to_string(), |s| s.to_string()),
            self.body_bytes,
            self.duration_us,
        )
    }

    /// JSON structured entry
    fn format_json(&self) -> String {
        serde_json::json!({
            "time": self.time.to_rfc3339(),
            "action": self.action,
            "activation_id": self.activation_id,
            "path": self.path,
            "status": self.status,
            "body_bytes": self.body_bytes,
            "duration_us": self.duration_us,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ActivationLogEntry {
        let mut e = ActivationLogEntry::new("assets", 128, 250);
        e.activation_id = Some("abc123".to_string());
        e.path = Some("/index.html".to_string());
        e.status = Some(200);
        e
    }

    #[test]
    fn test_plain_format() {
        let line = entry().format("plain");
        assert!(line.contains(" assets abc123 /index.html 200 128B 250us"));
    }

    #[test]
    fn test_plain_format_dashes_for_missing_fields() {
        let line = ActivationLogEntry::new("form", 10, 5).format("plain");
        assert!(line.contains(" form - - - 10B 5us"));
    }

    #[test]
    fn test_json_format() {
        let parsed: serde_json::Value = serde_json::from_str(&entry().format("json")).unwrap();
        assert_eq!(parsed["action"], "assets");
        assert_eq!(parsed["status"], 200);
        assert_eq!(parsed["body_bytes"], 128);
    }

    #[test]
    fn test_unknown_format_falls_back_to_plain() {
        let line = entry().format("combined");
        assert!(line.starts_with('['));
    }
}
