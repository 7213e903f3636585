//! API middleware stack.
//!
//! Execution order (outermost → innermost):
//! 1. Access log: one event per request with status and latency
//! 2. Session: resolves the caller's language from the session cookie

pub mod audit;
pub mod session;
