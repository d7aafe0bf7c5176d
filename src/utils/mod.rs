//! Utility modules.

/// Log sanitization utilities to keep credentials and oversized bodies
/// out of the logs.
pub mod log_sanitizer;
