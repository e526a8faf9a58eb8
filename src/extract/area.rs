//! House/plot area strategy: keyword-anchored regexes over a corpus of
//! "detail container" text, with a generic number+unit fallback.

use super::{class_matches, element_text};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

const NUMBER: &str = r"\d{1,3}(?:,\d{3})*(?:\.\d+)?";
const UNIT: &str = r"sq\.?\s*ft\.?|m²|m2|square\s*feet|sqft";

static HOUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)(?:house|home|living|interior|building)\s*({NUMBER})\s*({UNIT})"
    ))
    .unwrap()
});
static PLOT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)(?:lot|plot|land|property|garden)\s*size\s*({NUMBER})\s*({UNIT})"
    ))
    .unwrap()
});
static GENERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)({NUMBER})\s*({UNIT})")).unwrap());

static DETAIL_CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span, div, li, p").unwrap());
static DETAIL_CLASS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)area|size|details|specs").unwrap());

/// Returns `(house_area, plot_area)`.
///
/// The specific keyword-anchored patterns run first. The generic fallback then
/// fills whichever field is still unset, classifying each match by nearby
/// keywords; an unclaimed match goes to house first, plot second, and set
/// fields are never overwritten.
pub fn extract(document: &Html) -> (Option<String>, Option<String>) {
    let text = corpus(document);

    let mut house = HOUSE.captures(&text).map(|c| format_area(&c[1], &c[2]));
    let mut plot = PLOT.captures(&text).map(|c| format_area(&c[1], &c[2]));

    if house.is_some() && plot.is_some() {
        return (house, plot);
    }

    for caps in GENERIC.captures_iter(&text) {
        if house.is_some() && plot.is_some() {
            break;
        }
        let whole = caps.get(0).expect("regex always has a full match");
        let value = format_area(&caps[1], &caps[2]);
        let context = window(&text, whole.start(), whole.end()).to_lowercase();

        if context.contains("house") || context.contains("interior") {
            if house.is_none() {
                house = Some(value);
            }
        } else if context.contains("lot") || context.contains("land") {
            if plot.is_none() {
                plot = Some(value);
            }
        } else if house.is_none() {
            house = Some(value);
        } else if plot.is_none() {
            plot = Some(value);
        }
    }

    (house, plot)
}

/// Text to scan: detail containers when present, otherwise the whole page.
fn corpus(document: &Html) -> String {
    let joined = document
        .select(&DETAIL_CONTAINER)
        .filter(|el| class_matches(*el, &DETAIL_CLASS))
        .map(element_text)
        .collect::<Vec<_>>()
        .join(" ");
    if joined.trim().is_empty() {
        element_text(document.root_element())
    } else {
        joined
    }
}

/// Only the dotted `sq. ft.` spelling is rewritten; other unit spellings are
/// kept verbatim.
fn format_area(number: &str, unit: &str) -> String {
    format!("{} {}", number, unit.replace("sq. ft.", "sqft"))
}

/// A short slice of corpus text around a match, clamped to char boundaries.
fn window(text: &str, start: usize, end: usize) -> &str {
    let mut from = start.saturating_sub(40);
    while !text.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = (end + 40).min(text.len());
    while !text.is_char_boundary(to) {
        to += 1;
    }
    &text[from..to]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_and_plot_resolved_from_the_same_corpus() {
        let html = r#"
            <html><body>
                <div class="details">This house has 1,200 sqft</div>
                <div class="details">Lot size 5,000 sqft</div>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let (house, plot) = extract(&document);
        assert_eq!(house.as_deref(), Some("1,200 sqft"));
        assert_eq!(plot.as_deref(), Some("5,000 sqft"));
    }

    #[test]
    fn specific_patterns_win_without_a_fallback_pass() {
        let html = r#"
            <html><body>
                <p class="specs">Interior 2,050 sqft and garden size 8,400 sqft</p>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let (house, plot) = extract(&document);
        assert_eq!(house.as_deref(), Some("2,050 sqft"));
        assert_eq!(plot.as_deref(), Some("8,400 sqft"));
    }

    #[test]
    fn dotted_square_feet_spelling_is_normalized() {
        let html = r#"<html><body><span class="area">Living 1,500 sq. ft.</span></body></html>"#;
        let document = Html::parse_document(html);
        let (house, _) = extract(&document);
        assert_eq!(house.as_deref(), Some("1,500 sqft"));
    }

    #[test]
    fn metric_units_are_kept_verbatim() {
        let html = r#"<html><body><span class="size">home 140 m²</span></body></html>"#;
        let document = Html::parse_document(html);
        let (house, _) = extract(&document);
        assert_eq!(house.as_deref(), Some("140 m²"));
    }

    #[test]
    fn unkeyworded_matches_default_first_to_house_then_plot() {
        let html = r#"
            <html><body>
                <div class="specs">900 sqft</div>
                <div class="specs">4,200 sqft</div>
                <div class="specs">77 sqft</div>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let (house, plot) = extract(&document);
        assert_eq!(house.as_deref(), Some("900 sqft"));
        assert_eq!(plot.as_deref(), Some("4,200 sqft"));
    }

    #[test]
    fn falls_back_to_whole_document_text_without_detail_containers() {
        let html = r#"<html><body><table><td>house 640 square feet</td></table></body></html>"#;
        let document = Html::parse_document(html);
        let (house, plot) = extract(&document);
        assert_eq!(house.as_deref(), Some("640 square feet"));
        assert_eq!(plot, None);
    }

    #[test]
    fn no_area_text_leaves_both_unset() {
        let document = Html::parse_document("<html><body><p>cosy cottage</p></body></html>");
        assert_eq!(extract(&document), (None, None));
    }
}
