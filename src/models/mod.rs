use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single extracted real-estate listing.
///
/// Every content field is independently optional: sites rarely expose all of
/// them, and a missing one never blocks the others. Costs and areas are kept
/// as the raw strings found in the markup since their formatting varies too
/// widely across sites to parse into numbers safely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRecord {
    pub address: Option<String>,
    pub cost_to_buy: Option<String>,
    pub cost_to_rent: Option<String>,
    pub house_area: Option<String>,
    pub plot_area: Option<String>,
    pub bedroom_count: Option<u32>,
    pub publication_date: Option<String>,
    /// URL the record was extracted from, supplied by the caller.
    pub source_url: String,
    /// Wall-clock time of extraction, set once at construction.
    pub extracted_at: DateTime<Utc>,
}

impl ListingRecord {
    /// Create an empty record for the given source URL.
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            address: None,
            cost_to_buy: None,
            cost_to_rent: None,
            house_area: None,
            plot_area: None,
            bedroom_count: None,
            publication_date: None,
            source_url: source_url.into(),
            extracted_at: Utc::now(),
        }
    }

    /// True when no strategy recognized anything: every field other than
    /// `source_url` and `extracted_at` is unset. Callers treat this as
    /// "extraction failed".
    pub fn is_empty(&self) -> bool {
        self.address.is_none()
            && self.cost_to_buy.is_none()
            && self.cost_to_rent.is_none()
            && self.house_area.is_none()
            && self.plot_area.is_none()
            && self.bedroom_count.is_none()
            && self.publication_date.is_none()
    }
}
