//! Platform invocation surface
//!
//! The hosting platform drives actions over two endpoints: `POST /init`
//! acknowledges initialization (the actions are compiled in) and
//! `POST /run` carries one invocation record plus activation metadata.
//! The response to `/run` is the action's response envelope as JSON; an
//! action failure is reported as a 502 `{"error": ...}`.

use crate::actions;
use crate::config::Config;
use crate::host::response;
use crate::host::types::{InitRequest, RunRequest};
use crate::invocation::{ActivationContext, InvocationRecord};
use crate::logger::{self, ActivationLogEntry};
use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Instant;

/// Shared host state
pub struct HostState {
    pub config: Config,
    /// Reused across invocations; only the welcome action needs it.
    pub client: reqwest::Client,
}

impl HostState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

/// Main entry point for platform requests
pub async fn handle_request(
    req: Request<Incoming>,
    state: Arc<HostState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    if let Some(resp) = check_method(&method) {
        logger::log_warning(&format!("Method not allowed: {method} {path}"));
        return Ok(resp);
    }

    if oversized(&req, state.config.http.max_body_size) {
        return Ok(response::payload_too_large());
    }

    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            return Ok(response::bad_request("unreadable request body"));
        }
    };

    match path.as_str() {
        "/init" => Ok(handle_init(&body)),
        "/run" => Ok(handle_run(&body, &state).await),
        _ => Ok(response::not_found()),
    }
}

/// Reject anything but POST; the platform only POSTs.
fn check_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    if method == Method::POST {
        None
    } else {
        Some(response::method_not_allowed())
    }
}

/// Whether the declared Content-Length exceeds the configured limit.
///
/// An unparseable header is ignored rather than rejected; the collected
/// body is bounded by the connection timeout either way.
fn oversized<B>(req: &Request<B>, max_body_size: u64) -> bool {
    let Some(len) = req.headers().get("content-length") else {
        return false;
    };
    match len.to_str().ok().and_then(|s| s.parse::<u64>().ok()) {
        Some(size) if size > max_body_size => {
            logger::log_error(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            true
        }
        _ => false,
    }
}

/// Acknowledge initialization.
fn handle_init(body: &[u8]) -> Response<Full<Bytes>> {
    match serde_json::from_slice::<InitRequest>(body) {
        Ok(init) => {
            logger::log_init(init.value.name.as_deref());
            response::json_ok(&serde_json::json!({ "ok": true }))
        }
        Err(e) => response::bad_request(&format!("invalid init payload: {e}")),
    }
}

/// Run one invocation.
async fn handle_run(body: &[u8], state: &Arc<HostState>) -> Response<Full<Bytes>> {
    let run: RunRequest = match serde_json::from_slice(body) {
        Ok(r) => r,
        Err(e) => return response::bad_request(&format!("invalid run payload: {e}")),
    };

    let started = Instant::now();
    let kind = state.config.action.kind;

    let mut ctx = ActivationContext::from_config(&state.config.action);
    if let Some(name) = run.action_name {
        ctx.action_name = Some(name);
    }
    if let Some(api_host) = run.api_host {
        ctx.api_host = Some(api_host);
    }

    let record = InvocationRecord::new(run.value);
    let web_path = record.web_path().map(ToString::to_string);

    match actions::invoke(kind, &record, &ctx, &state.client).await {
        Ok(envelope) => {
            if state.config.logging.access_log {
                let mut entry = ActivationLogEntry::new(
                    kind.label(),
                    envelope.body_len(),
                    duration_us(started),
                );
                entry.activation_id = run.activation_id;
                entry.path = web_path;
                entry.status = envelope.status_code;
                logger::log_activation(&entry, &state.config.logging.access_log_format);
            }
            response::json_ok(&envelope)
        }
        Err(e) => {
            logger::log_error(&format!("activation failed: {e}"));
            response::activation_error(&e.to_string())
        }
    }
}

fn duration_us(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX)
}
