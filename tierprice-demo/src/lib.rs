use std::io::Write;
use tierprice_catalog::{CustomerFactory, PriceQuote};

pub mod app_config;
pub mod error;

pub use app_config::{Config, DemoConfig, OutputFormat};
pub use error::{DemoError, DemoResult};

/// `Customer <tier> [Price: <price>, Discount: <discount>]`
pub fn render_text(quote: &PriceQuote) -> String {
    format!(
        "Customer {} [Price: {}, Discount: {}]",
        quote.tier, quote.price, quote.discount
    )
}

pub fn render(quote: &PriceQuote, format: OutputFormat) -> DemoResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(quote)),
        OutputFormat::Json => Ok(serde_json::to_string(quote)?),
    }
}

/// Quote every tier in order and write one line per customer
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> DemoResult<Vec<PriceQuote>> {
    let quotes: Vec<PriceQuote> = CustomerFactory::create_all()
        .iter()
        .map(|customer| customer.quote(&config.item_id, config.as_of))
        .collect();

    for quote in &quotes {
        writeln!(out, "{}", render(quote, config.output)?)?;
    }

    tracing::info!(
        item_id = %config.item_id,
        as_of = %config.as_of,
        customers = quotes.len(),
        "Quoted all customer tiers"
    );

    Ok(quotes)
}
