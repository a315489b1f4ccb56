//! System utility functions

/// Get current UTC timestamp in RFC3339 format
pub fn now_utc() -> String {
    chrono::Utc::now().to_rfc3339()
}
