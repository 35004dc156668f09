//! Welcome message action
//!
//! Relays a welcome message from a remote HTTPS endpoint. The URL is
//! personalized with the platform API host when one is known; any fetch
//! failure falls back to the configured static body. No retry, no explicit
//! timeout beyond the client's defaults.

use crate::invocation::{ActivationContext, ResponseEnvelope};
use crate::logger;

/// Respond to a single invocation.
pub async fn respond(ctx: &ActivationContext, client: &reqwest::Client) -> ResponseEnvelope {
    let url = welcome_url(&ctx.welcome_url, ctx.api_host.as_deref());

    match fetch(client, &url).await {
        Ok(body) => ResponseEnvelope::body_only(body),
        Err(e) => {
            logger::log_warning(&format!("welcome fetch failed for '{url}': {e}"));
            ResponseEnvelope::body_only(ctx.welcome_fallback.clone())
        }
    }
}

/// Build the personalized welcome URL.
///
/// Colons in the API host would not survive as a path segment, so they are
/// folded to dashes before appending.
fn welcome_url(base: &str, api_host: Option<&str>) -> String {
    match api_host {
        Some(host) => format!("{base}{}", host.replace(':', "-")),
        None => base.to_string(),
    }
}

/// The remote body is relayed whatever the status code; only transport
/// failures reach the fallback path.
async fn fetch(client: &reqwest::Client, url: &str) -> Result<String, reqwest::Error> {
    client.get(url).send().await?.text().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_without_api_host() {
        assert_eq!(
            welcome_url("https://welcome.example.com/x/", None),
            "https://welcome.example.com/x/"
        );
    }

    #[test]
    fn test_url_appends_api_host() {
        assert_eq!(
            welcome_url("https://welcome.example.com/x/", Some("api.example.com")),
            "https://welcome.example.com/x/api.example.com"
        );
    }

    #[test]
    fn test_colons_folded_to_dashes() {
        // Only colons are folded; slashes pass through untouched.
        assert_eq!(
            welcome_url("https://w/x/", Some("https://host:3233")),
            "https://w/x/https-//host-3233"
        );
    }
}
