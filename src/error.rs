//! Action error types
//!
//! Only failures that abort an invocation live here. User-visible
//! conditions (missing web exposure, empty path) are reported in-band
//! through the response envelope instead.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal invocation failures, surfaced to the platform as a 502.
#[derive(Debug, Error)]
pub enum ActionError {
    /// The fully-qualified action name is required to compute the web base
    /// path and was supplied neither by the run payload nor configuration.
    #[error("action name unavailable; cannot compute web base path")]
    MissingActionName,

    /// The resolved asset could not be read from the bundle directory.
    #[error("failed to read asset '{}': {source}", path.display())]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
