//! Bundled action implementations
//!
//! Each action is a single request/response transform: an invocation
//! record in, a response envelope out. `invoke` dispatches on the
//! configured kind.

pub mod assets;
pub mod form;
pub mod rewrite;
pub mod welcome;

use crate::error::ActionError;
use crate::invocation::{ActivationContext, InvocationRecord, ResponseEnvelope};
use serde::Deserialize;

/// Which compiled-in action this host serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Assets,
    Welcome,
    Form,
}

impl ActionKind {
    /// Stable label for logging.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Assets => "assets",
            Self::Welcome => "welcome",
            Self::Form => "form",
        }
    }
}

/// Run one invocation of the configured action.
pub async fn invoke(
    kind: ActionKind,
    record: &InvocationRecord,
    ctx: &ActivationContext,
    client: &reqwest::Client,
) -> Result<ResponseEnvelope, ActionError> {
    match kind {
        ActionKind::Assets => assets::respond(record, ctx),
        ActionKind::Welcome => Ok(welcome::respond(ctx, client).await),
        ActionKind::Form => Ok(form::respond()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;
    use std::path::PathBuf;

    fn ctx() -> ActivationContext {
        ActivationContext {
            action_name: Some("ns/pkg/act".to_string()),
            api_host: None,
            bundle_dir: PathBuf::from("bundle"),
            welcome_url: String::new(),
            welcome_fallback: String::new(),
        }
    }

    #[test]
    fn test_kind_deserializes_snake_case() {
        let kind: ActionKind = serde_json::from_str("\"assets\"").unwrap();
        assert_eq!(kind, ActionKind::Assets);
        let kind: ActionKind = serde_json::from_str("\"welcome\"").unwrap();
        assert_eq!(kind, ActionKind::Welcome);
    }

    #[tokio::test]
    async fn test_form_dispatch() {
        let record = InvocationRecord::new(Map::new());
        let client = reqwest::Client::new();
        let envelope = invoke(ActionKind::Form, &record, &ctx(), &client)
            .await
            .unwrap();
        assert!(envelope.body.contains("Pay Now"));
    }
}
