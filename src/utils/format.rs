//! Formatting utilities for dates and tag labels.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Format a backend date for display (e.g. "January 5, 2025").
///
/// Accepts plain dates and RFC 3339 timestamps. Unparsable input is returned
/// unchanged.
pub fn format_post_date(date: &str) -> String {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|dt| dt.date_naive()));

    match parsed {
        Some(day) => day.format("%B %-d, %Y").to_string(),
        None => date.to_string(),
    }
}

/// Lowercase, dash-separated key for a tag label ("Video Editing" -> "video-editing").
pub fn tag_key(label: &str) -> String {
    WHITESPACE.replace_all(&label.to_lowercase(), "-").into_owned()
}
