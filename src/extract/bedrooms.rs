//! Bedroom-count strategy: first "N beds"-style mention wins, with a meta-tag
//! fallback.

use super::text_nodes;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

static BEDROOMS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(?:beds?|bedrooms?|br\b)").unwrap());
static META_BEDS: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:beds"]"#).unwrap());

pub fn extract(document: &Html) -> Option<u32> {
    for (text, _) in text_nodes(document) {
        if let Some(caps) = BEDROOMS.captures(text) {
            if let Ok(count) = caps[1].parse::<u32>() {
                return Some(count);
            }
        }
    }

    // Meta content may be a decimal ("3.0"); truncate, and swallow anything
    // unparseable.
    document
        .select(&META_BEDS)
        .next()
        .and_then(|el| el.value().attr("content"))
        .and_then(|content| content.trim().parse::<f64>().ok())
        .map(|count| count.trunc() as u32)
}
