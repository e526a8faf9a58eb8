//! Buy/rent cost strategy: currency-looking text nodes classified by the
//! wording of their enclosing element.

use super::{element_text, text_nodes};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

// Symbol, grouped digits, optional cents. Covers both supported currency
// families ($ and R).
static CURRENCY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[$R]\s*\d{1,3}(?:,\d{3})*(?:\.\d{2})?").unwrap());

const BUY_KEYWORDS: [&str; 3] = ["buy", "for sale", "price"];
const RENT_KEYWORDS: [&str; 2] = ["rent", "per month"];
const GENERIC_KEYWORDS: [&str; 4] = ["cost", "value", "price", "amount"];

/// Returns `(cost_to_buy, cost_to_rent)`.
///
/// First match per class wins; later matches never overwrite. A price with no
/// classifying keyword but a generic cost keyword nearby defaults to the buy
/// side, and only while both sides are still unset.
pub fn extract(document: &Html) -> (Option<String>, Option<String>) {
    let mut buy: Option<String> = None;
    let mut rent: Option<String> = None;

    for (text, parent) in text_nodes(document) {
        let trimmed = text.trim();
        if !CURRENCY.is_match(trimmed) {
            continue;
        }
        let context = parent
            .map(element_text)
            .unwrap_or_default()
            .to_lowercase();

        if BUY_KEYWORDS.iter().any(|kw| context.contains(kw)) {
            if buy.is_none() {
                buy = Some(trimmed.to_string());
            }
        } else if RENT_KEYWORDS.iter().any(|kw| context.contains(kw)) {
            if rent.is_none() {
                rent = Some(trimmed.to_string());
            }
        }

        // Ambiguous price with only a generic cost keyword: default to buy.
        if buy.is_none()
            && rent.is_none()
            && trimmed.len() > 3
            && GENERIC_KEYWORDS.iter().any(|kw| context.contains(kw))
        {
            buy = Some(trimmed.to_string());
        }
    }

    (buy, rent)
}
