//! Action host runtime
//!
//! The HTTP surface the invoking platform talks to, plus listener setup.

pub mod listener;
pub mod proxy;
pub mod response;
pub mod types;

// Re-export commonly used items
pub use listener::bind_listener;
pub use proxy::{handle_request, HostState};
