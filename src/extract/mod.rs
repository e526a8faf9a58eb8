pub mod address;
pub mod area;
pub mod bedrooms;
pub mod date;
pub mod price;

use crate::models::ListingRecord;
use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::debug;

/// Heuristic field extractor for real-estate listing pages.
///
/// Runs one independent, best-effort strategy per field over the parsed
/// document. A strategy that finds nothing leaves its field unset; nothing a
/// single strategy encounters can abort the others. The extractor holds no
/// state, so the same document always yields the same field values.
pub struct FieldExtractor;

impl FieldExtractor {
    /// Extract a [`ListingRecord`] from a parsed document.
    pub fn extract(document: &Html, source_url: &str) -> ListingRecord {
        let mut record = ListingRecord::new(source_url);

        record.address = address::extract(document);

        let (buy, rent) = price::extract(document);
        record.cost_to_buy = buy;
        record.cost_to_rent = rent;

        let (house, plot) = area::extract(document);
        record.house_area = house;
        record.plot_area = plot;

        record.bedroom_count = bedrooms::extract(document);
        record.publication_date = date::extract(document);

        debug!(
            "Extracted record from {}: empty={}",
            source_url,
            record.is_empty()
        );

        record
    }
}

/// Visible text of an element with runs of whitespace collapsed to single
/// spaces and the ends trimmed.
pub(crate) fn element_text(element: ElementRef) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when the element carries a `class` attribute matching `pattern`.
pub(crate) fn class_matches(element: ElementRef, pattern: &Regex) -> bool {
    element
        .value()
        .attr("class")
        .map_or(false, |class| pattern.is_match(class))
}

/// All text nodes of the document in document order, each paired with its
/// enclosing element (if any).
pub(crate) fn text_nodes<'a>(
    document: &'a Html,
) -> impl Iterator<Item = (&'a str, Option<ElementRef<'a>>)> + 'a {
    document.root_element().descendants().filter_map(|node| {
        node.value().as_text().map(|text| {
            let parent = node.parent().and_then(ElementRef::wrap);
            (&**text, parent)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_LISTING: &str = r#"
        <html><body>
            <h1 class="property-address">742 Evergreen Terrace</h1>
            <div class="price">For sale: $450,000</div>
            <div class="rental">Rent: $2,100 per month</div>
            <ul class="details">
                <li>This house has 1,200 sqft</li>
                <li>Lot size 5,000 sqft</li>
            </ul>
            <span>3 beds, 2 baths</span>
            <time datetime="2023-01-15T10:00:00Z">January 15, 2023</time>
        </body></html>
    "#;

    #[test]
    fn extracts_every_field_from_a_complete_listing() {
        let document = Html::parse_document(FULL_LISTING);
        let record = FieldExtractor::extract(&document, "https://example.com/742");

        assert_eq!(record.address.as_deref(), Some("742 Evergreen Terrace"));
        assert_eq!(record.cost_to_buy.as_deref(), Some("For sale: $450,000"));
        assert_eq!(record.cost_to_rent.as_deref(), Some("Rent: $2,100 per month"));
        assert_eq!(record.house_area.as_deref(), Some("1,200 sqft"));
        assert_eq!(record.plot_area.as_deref(), Some("5,000 sqft"));
        assert_eq!(record.bedroom_count, Some(3));
        assert_eq!(
            record.publication_date.as_deref(),
            Some("2023-01-15 10:00:00+00:00")
        );
        assert_eq!(record.source_url, "https://example.com/742");
        assert!(!record.is_empty());
    }

    #[test]
    fn extraction_is_idempotent_apart_from_the_timestamp() {
        let document = Html::parse_document(FULL_LISTING);
        let first = FieldExtractor::extract(&document, "https://example.com/742");
        let second = FieldExtractor::extract(&document, "https://example.com/742");

        assert_eq!(first.address, second.address);
        assert_eq!(first.cost_to_buy, second.cost_to_buy);
        assert_eq!(first.cost_to_rent, second.cost_to_rent);
        assert_eq!(first.house_area, second.house_area);
        assert_eq!(first.plot_area, second.plot_area);
        assert_eq!(first.bedroom_count, second.bedroom_count);
        assert_eq!(first.publication_date, second.publication_date);
    }

    #[test]
    fn unrecognizable_document_yields_an_empty_record() {
        let document =
            Html::parse_document("<html><body><p>Welcome to our blog!</p></body></html>");
        let record = FieldExtractor::extract(&document, "https://example.com/blog");
        assert!(record.is_empty());
        assert_eq!(record.source_url, "https://example.com/blog");
    }

    #[test]
    fn malformed_markup_does_not_abort_other_fields() {
        let html = r#"
            <html><body>
                <h1 class="address">1 Broken Lane</h1>
                <time datetime="not-a-date">whenever</time>
                <div><p>3 bedrooms
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let record = FieldExtractor::extract(&document, "https://example.com/broken");

        assert_eq!(record.address.as_deref(), Some("1 Broken Lane"));
        assert_eq!(record.publication_date.as_deref(), Some("not-a-date"));
        assert_eq!(record.bedroom_count, Some(3));
    }
}
