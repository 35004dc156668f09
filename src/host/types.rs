//! Platform wire types
//!
//! Payload shapes the invoking platform sends to the host's `/init` and
//! `/run` endpoints.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Payload of `POST /init`.
///
/// The platform may ship a code artifact here; this host compiles its
/// actions in, so everything but the declared name is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct InitRequest {
    #[serde(default)]
    pub value: InitValue,
}

#[derive(Debug, Default, Deserialize)]
pub struct InitValue {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub main: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub binary: Option<bool>,
}

/// Payload of `POST /run`: the invocation record plus activation metadata.
///
/// All metadata fields are optional; configuration supplies fallbacks.
#[derive(Debug, Default, Deserialize)]
pub struct RunRequest {
    /// The argument map handed to the action.
    #[serde(default)]
    pub value: Map<String, Value>,
    /// Fully-qualified name of the invoked action.
    #[serde(default)]
    pub action_name: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    pub namespace: Option<String>,
    /// Platform API host.
    #[serde(default)]
    pub api_host: Option<String>,
    #[serde(default)]
    pub activation_id: Option<String>,
    /// Epoch-millisecond deadline; informational, no cancellation here.
    #[serde(default)]
    #[allow(dead_code)]
    pub deadline: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_request_full() {
        let payload = r#"{
            "value": { "__ow_path": "/style.css" },
            "action_name": "/ns/pkg/act",
            "namespace": "ns",
            "api_host": "https://host:3233",
            "activation_id": "a1",
            "deadline": 1234567890
        }"#;
        let run: RunRequest = serde_json::from_str(payload).unwrap();
        assert_eq!(run.action_name.as_deref(), Some("/ns/pkg/act"));
        assert_eq!(run.api_host.as_deref(), Some("https://host:3233"));
        assert_eq!(run.activation_id.as_deref(), Some("a1"));
        assert_eq!(run.value["__ow_path"], "/style.css");
    }

    #[test]
    fn test_run_request_minimal() {
        let run: RunRequest = serde_json::from_str("{}").unwrap();
        assert!(run.value.is_empty());
        assert_eq!(run.action_name, None);
        assert_eq!(run.deadline, None);
    }

    #[test]
    fn test_init_request_ignores_code() {
        let payload = r#"{"value": {"name": "act", "main": "main", "code": "zzz", "binary": false}}"#;
        let init: InitRequest = serde_json::from_str(payload).unwrap();
        assert_eq!(init.value.name.as_deref(), Some("act"));
        assert_eq!(init.value.binary, Some(false));
    }
}
