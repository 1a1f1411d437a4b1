//! Formatting helpers for identifiers and timestamps.

use chrono::{DateTime, SecondsFormat, Utc};

/// First 8 characters of a record id.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

/// Format a timestamp for display.
pub fn format_timestamp(dt: &DateTime<Utc>, pretty: bool) -> String {
    if pretty {
        dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    } else {
        dt.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
