use crate::models::ListingRecord;
use anyhow::{Context, Result};
use tracing::info;

const CSV_HEADER: &str = "address,cost_to_buy,cost_to_rent,house_area,plot_area,\
bedroom_count,publication_date,source_url,extracted_at";

/// Render the record as a two-line CSV document: header plus one row.
pub fn to_csv(record: &ListingRecord) -> String {
    let bedroom_count = record
        .bedroom_count
        .map(|n| n.to_string())
        .unwrap_or_default();
    let extracted_at = record.extracted_at.to_rfc3339();

    let row = [
        record.address.as_deref().unwrap_or(""),
        record.cost_to_buy.as_deref().unwrap_or(""),
        record.cost_to_rent.as_deref().unwrap_or(""),
        record.house_area.as_deref().unwrap_or(""),
        record.plot_area.as_deref().unwrap_or(""),
        &bedroom_count,
        record.publication_date.as_deref().unwrap_or(""),
        &record.source_url,
        &extracted_at,
    ]
    .iter()
    .map(|field| csv_field(field))
    .collect::<Vec<_>>()
    .join(",");

    format!("{}\n{}\n", CSV_HEADER, row)
}

fn csv_field(value: &str) -> String {
    if value.contains(|c| c == ',' || c == '"' || c == '\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Write the record to `listing_record.json` and `home_data.csv`.
pub async fn write_outputs(record: &ListingRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    tokio::fs::write("listing_record.json", json)
        .await
        .context("Failed to write listing_record.json")?;
    info!("💾 Saved record to listing_record.json");

    tokio::fs::write("home_data.csv", to_csv(record))
        .await
        .context("Failed to write home_data.csv")?;
    info!("💾 Saved CSV export to home_data.csv");

    Ok(())
}
