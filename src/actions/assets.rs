//! Static asset responder
//!
//! Serves files from the bundle directory: binary types are delivered
//! base64-encoded with a Content-Type header, text is delivered as UTF-8,
//! and HTML gets its root-relative references rewritten to the action's
//! web base path. A missing file falls back to the bundle root's
//! `index.html` (single-page-app policy).

use crate::actions::rewrite;
use crate::error::ActionError;
use crate::invocation::{ActivationContext, InvocationRecord, ResponseEnvelope};
use crate::mime;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::fs;
use std::path::{Path, PathBuf};

/// Body returned when the action was not deployed with web exposure.
const NOT_WEB_BODY: &str = "<h1>Error: not deployed as <tt>--web=true</tt></h1>";

/// Client-side redirect that restores the trailing slash when the bundle
/// root is requested without one.
const TRAILING_SLASH_REDIRECT: &str = r#"<script>location.href += "/"</script>"#;

const INDEX_FALLBACK: &str = "index.html";

/// Respond to a single invocation.
pub fn respond(
    record: &InvocationRecord,
    ctx: &ActivationContext,
) -> Result<ResponseEnvelope, ActionError> {
    if !record.is_web_invocation() {
        return Ok(ResponseEnvelope::body_only(NOT_WEB_BODY));
    }

    let path = record.web_path().unwrap_or_default();
    if path.is_empty() {
        return Ok(ResponseEnvelope::body_only(TRAILING_SLASH_REDIRECT));
    }

    serve(path, ctx)
}

/// Resolve and deliver one asset.
fn serve(path: &str, ctx: &ActivationContext) -> Result<ResponseEnvelope, ActionError> {
    let file = resolve(path, &ctx.bundle_dir);
    let data = fs::read(&file).map_err(|source| ActionError::AssetRead {
        path: file.clone(),
        source,
    })?;

    // Classification keys on the requested path, not the resolved file: a
    // nonexistent binary path that falls back to index.html still gets the
    // binary treatment. Kept bug-for-bug with the deployed responder.
    if mime::is_binary_path(path) {
        let mut envelope = ResponseEnvelope::ok(BASE64.encode(data));
        if let Some(content_type) = mime::content_type_for(extension_of(path)) {
            envelope = envelope.with_content_type(content_type);
        }
        Ok(envelope)
    } else {
        // Lossy on purpose: a binary file misclassified as text gets its
        // bytes substituted and served anyway, it does not abort.
        let text = String::from_utf8_lossy(&data);

        let body = if path.ends_with(".html") {
            let prefix = rewrite::web_prefix(ctx.action_name()?);
            rewrite::rewrite_base(&text, &prefix)
        } else {
            text.into_owned()
        };
        Ok(ResponseEnvelope::ok(body))
    }
}

/// Resolve the requested path under the bundle root.
///
/// The leading slash is stripped and `..` removed before joining; a path
/// that does not name a file falls back to the root `index.html`.
fn resolve(path: &str, bundle_dir: &Path) -> PathBuf {
    let clean = path.replace("..", "");
    let file = bundle_dir.join(clean.trim_start_matches('/'));
    if file.is_file() {
        file
    } else {
        bundle_dir.join(INDEX_FALLBACK)
    }
}

fn extension_of(path: &str) -> Option<&str> {
    Path::new(path).extension().and_then(|e| e.to_str())
}
