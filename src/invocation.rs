//! Invocation record and response envelope types
//!
//! The platform hands each action a read-only argument map and expects a
//! `{body, statusCode?, headers?}` mapping back. The activation context
//! carries what the platform would otherwise expose through ambient
//! `__OW_*` environment variables, made explicit per invocation.

use crate::config::ActionConfig;
use crate::error::ActionError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::PathBuf;

/// Key injected into the argument map when an action is deployed with web
/// exposure enabled; its value is the request path below the action.
pub const WEB_PATH_KEY: &str = "__ow_path";

/// Read-only view of the argument map the platform passes per request.
#[derive(Debug, Clone)]
pub struct InvocationRecord {
    args: Map<String, Value>,
}

impl InvocationRecord {
    pub const fn new(args: Map<String, Value>) -> Self {
        Self { args }
    }

    /// Whether the record carries the web-exposure path marker at all.
    /// The marker may be present with an empty value (bundle root request).
    pub fn is_web_invocation(&self) -> bool {
        self.args.contains_key(WEB_PATH_KEY)
    }

    /// The requested path below the action, if invoked through the web.
    pub fn web_path(&self) -> Option<&str> {
        self.args.get(WEB_PATH_KEY).and_then(Value::as_str)
    }

}

/// Response mapping returned to the platform.
///
/// `statusCode` and `headers` are omitted from the serialized form when
/// unset: the web-exposure error and the empty-path redirect are body-only
/// responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

impl ResponseEnvelope {
    /// Envelope with a body and no explicit status (platform implies 200).
    pub fn body_only(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status_code: None,
            headers: None,
        }
    }

    /// Envelope with an explicit 200 status.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status_code: Some(200),
            headers: None,
        }
    }

    /// Attach a Content-Type header.
    #[must_use]
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert("Content-Type".to_string(), content_type.to_string());
        self
    }

    /// Body size in bytes, for activation logging.
    pub fn body_len(&self) -> usize {
        self.body.len()
    }
}

/// Explicit per-invocation context.
///
/// Replaces the ambient environment reads (`__OW_ACTION_NAME`,
/// `__OW_API_HOST`) the original platform runtime relied on: values come
/// from configuration and are overridden by the run payload's activation
/// metadata before dispatch.
#[derive(Debug, Clone)]
pub struct ActivationContext {
    /// Fully-qualified action name (`namespace/package/action`).
    pub action_name: Option<String>,
    /// Platform API host, used to personalize the welcome URL.
    pub api_host: Option<String>,
    /// Directory the asset responder serves from.
    pub bundle_dir: PathBuf,
    /// Remote endpoint the welcome action relays from.
    pub welcome_url: String,
    /// Body returned when the welcome fetch fails.
    pub welcome_fallback: String,
}

impl ActivationContext {
    pub fn from_config(action: &ActionConfig) -> Self {
        Self {
            action_name: action.name.clone(),
            api_host: action.api_host.clone(),
            bundle_dir: PathBuf::from(&action.bundle_dir),
            welcome_url: action.welcome_url.clone(),
            welcome_fallback: action.welcome_fallback.clone(),
        }
    }

    /// The action name, required when computing the web base path.
    pub fn action_name(&self) -> Result<&str, ActionError> {
        self.action_name
            .as_deref()
            .ok_or(ActionError::MissingActionName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> InvocationRecord {
        match value {
            Value::Object(map) => InvocationRecord::new(map),
            _ => unreachable!("test records are objects"),
        }
    }

    #[test]
    fn test_web_path_marker() {
        let rec = record(json!({ "__ow_path": "/style.css" }));
        assert!(rec.is_web_invocation());
        assert_eq!(rec.web_path(), Some("/style.css"));

        let rec = record(json!({ "name": "world" }));
        assert!(!rec.is_web_invocation());
        assert_eq!(rec.web_path(), None);
    }

    #[test]
    fn test_empty_path_is_still_web() {
        let rec = record(json!({ "__ow_path": "" }));
        assert!(rec.is_web_invocation());
        assert_eq!(rec.web_path(), Some(""));
    }

    #[test]
    fn test_body_only_serialization() {
        let envelope = ResponseEnvelope::body_only("<h1>hi</h1>");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json, json!({ "body": "<h1>hi</h1>" }));
    }

    #[test]
    fn test_full_envelope_serialization() {
        let envelope = ResponseEnvelope::ok("aGk=").with_content_type("image/png");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            json!({
                "body": "aGk=",
                "statusCode": 200,
                "headers": { "Content-Type": "image/png" }
            })
        );
    }

    #[test]
    fn test_missing_action_name_is_an_error() {
        let ctx = ActivationContext {
            action_name: None,
            api_host: None,
            bundle_dir: PathBuf::from("bundle"),
            welcome_url: String::new(),
            welcome_fallback: String::new(),
        };
        assert!(ctx.action_name().is_err());
    }
}
