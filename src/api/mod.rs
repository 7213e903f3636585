//! Triage HTTP API.
//!
//! Form-encoded assessment endpoints for the professional and
//! self-assessment tools, a language switcher and a health probe.
//! The router is composable: `triage_router()` returns a `Router` that can
//! be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::triage_router;
pub use server::{start_server, start_server_on, ServerInfo, TriageServer};
pub use types::ApiContext;
