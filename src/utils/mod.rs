//! Small text and date helpers shared by the fetcher and the report updater.

use chrono::{Local, NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Keep at most `limit` characters of `text`.
///
/// The cut is character based, never inside a UTF-8 sequence, and not word aware.
///
/// # Examples
/// ```
/// use impact_tracker::utils::truncate_chars;
///
/// assert_eq!(truncate_chars("人工智能", 2), "人工");
/// assert_eq!(truncate_chars("abc", 10), "abc");
/// ```
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Month key of a `YYYY-MM-DD` date: its first seven characters.
///
/// # Examples
/// ```
/// use impact_tracker::utils::month_key;
///
/// assert_eq!(month_key("2026-02-10"), "2026-02");
/// assert_eq!(month_key("2026"), "2026");
/// ```
pub fn month_key(date: &str) -> &str {
    truncate_chars(date, 7)
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
