//! Publication-date strategy: the first `<time>` element, preferring its
//! machine-readable `datetime` attribute over visible text. Anything that
//! fails to parse is kept verbatim rather than dropped.

use super::element_text;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

static TIME: Lazy<Selector> = Lazy::new(|| Selector::parse("time").unwrap());
static POSTED_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:posted on|published on|listed on)\s*(.*)").unwrap());

pub fn extract(document: &Html) -> Option<String> {
    let time = document.select(&TIME).next()?;

    if let Some(attr) = time.value().attr("datetime").filter(|a| !a.is_empty()) {
        return Some(normalize_datetime_attr(attr));
    }

    let text = element_text(time);
    if text.is_empty() {
        return None;
    }
    Some(normalize_date_text(&text))
}

/// ISO-8601 with offset (a trailing `Z` reads as +00:00), then naive
/// datetime, then bare date; otherwise the attribute is returned unchanged.
fn normalize_datetime_attr(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M:%S%:z").to_string();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// Strip a "posted on"-style prefix and try a long-form date; keep the raw
/// text on any failure.
fn normalize_date_text(text: &str) -> String {
    if let Some(caps) = POSTED_PREFIX.captures(text) {
        let remainder = caps[1].trim().to_string();
        if let Ok(date) = NaiveDate::parse_from_str(&remainder, "%B %d, %Y") {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    text.to_string()
}
