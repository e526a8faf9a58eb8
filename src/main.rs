mod export;
mod extract;
mod fetch;
mod models;

use extract::FieldExtractor;
use fetch::PageFetcher;
use scraper::Html;
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Listing Lens - Real Estate Page Extractor");
    info!("============================================");

    let url = match std::env::args().nth(1) {
        Some(url) => url,
        None => anyhow::bail!("Usage: listing-lens <listing-url>"),
    };

    let fetcher = PageFetcher::new()?;

    info!("Fetching listing page...");
    let html = fetcher.fetch(&url).await?;

    let document = Html::parse_document(&html);
    let record = FieldExtractor::extract(&document, &url);

    if record.is_empty() {
        warn!("Could not extract real estate data from this page");
        warn!("The page structure might be different or the data is not present");
        info!("Try inspecting the page HTML to understand its structure");
        return Ok(());
    }

    println!("Address:           {}", field(&record.address));
    println!("Cost to buy:       {}", field(&record.cost_to_buy));
    println!("Cost to rent:      {}", field(&record.cost_to_rent));
    println!("House area:        {}", field(&record.house_area));
    println!("Plot area:         {}", field(&record.plot_area));
    println!(
        "Bedrooms:          {}",
        record
            .bedroom_count
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("Publication date:  {}", field(&record.publication_date));
    println!("Source URL:        {}", record.source_url);

    export::write_outputs(&record).await?;

    Ok(())
}

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}
