//! Street-address strategy: an ordered candidate list over the usual ways
//! sites mark up an address, first non-empty hit wins.

use super::{class_matches, element_text};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static HEADING_CLASS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)address|property-address").unwrap());
static ADDRESS_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)address").unwrap());
static MICRODATA: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"[itemprop="streetAddress"]"#).unwrap());
static META_STREET: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:street-address"]"#).unwrap());

pub fn extract(document: &Html) -> Option<String> {
    let candidates = [
        heading_candidate(document),
        document.select(&MICRODATA).next(),
        classed_candidate(document),
        document.select(&META_STREET).next(),
    ];
    candidates.into_iter().flatten().find_map(candidate_value)
}

/// Text content if present, otherwise the `content` attribute. An empty
/// candidate falls through to the next one.
fn candidate_value(element: ElementRef) -> Option<String> {
    let text = element_text(element);
    if !text.is_empty() {
        return Some(text);
    }
    element
        .value()
        .attr("content")
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

fn heading_candidate(document: &Html) -> Option<ElementRef<'_>> {
    document
        .select(&HEADING)
        .find(|el| class_matches(*el, &HEADING_CLASS))
}

fn classed_candidate(document: &Html) -> Option<ElementRef<'_>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| class_matches(*el, &ADDRESS_CLASS))
}
