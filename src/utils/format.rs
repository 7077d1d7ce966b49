//! Formatting utilities for listing rows.

use chrono::{DateTime, Local, TimeZone};

use crate::config::DATE_FORMAT;
use crate::models::EntryKind;

/// Placeholder for entries whose creation time is unknown, same width as a date.
const UNKNOWN_DATE: &str = "----------------";

/// Format a creation time as `YYYY-MM-DD HH:mm`.
pub fn format_created<Tz: TimeZone>(timestamp: Option<&DateTime<Tz>>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match timestamp {
        Some(ts) => ts.format(DATE_FORMAT).to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}

/// Four-column type tag for a listing row.
pub fn kind_tag(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Directory => "dir ",
        EntryKind::File => "file",
        EntryKind::Other => "?   ",
    }
}

/// Format a full listing row: `<tag> <created> <name>`.
pub fn format_entry(
    kind: EntryKind,
    created_at: Option<&DateTime<Local>>,
    name: &str,
) -> String {
    format!("{} {} {}", kind_tag(kind), format_created(created_at), name)
}
