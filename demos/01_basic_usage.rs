use std::time::Duration;

use ystockquote_rs::{QuoteField, YqClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. A client with a 10-second overall timeout.
    let client = YqClient::builder().timeout(Duration::from_secs(10)).build()?;

    // 2. Full snapshot for one symbol.
    let goog = ystockquote_rs::get_all(&client, "GOOG").await?;
    println!("--- Snapshot for {} ---", goog.symbol);
    for (name, raw) in goog.iter() {
        println!("  {name:<28} {raw}");
    }
    println!();

    // 3. Previous close for a batch, in input order. `None` means the service sent N/A.
    let symbols = ["GOOG", "TSLA", "MSFT"];
    let closes = ystockquote_rs::get_previous_close_many(&client, symbols).await?;
    println!("--- Previous close ---");
    for (sym, pc) in symbols.iter().zip(closes) {
        println!("  {sym}: {}", pc.as_deref().unwrap_or("unavailable"));
    }
    println!();

    // 4. Any single catalog field.
    let cap = ystockquote_rs::get_field(&client, "TSLA", QuoteField::MarketCap).await?;
    println!("TSLA market cap: {}", cap.unwrap_or_default());
    println!();

    // 5. Daily history over an inclusive date range.
    let prices =
        ystockquote_rs::get_historical_prices(&client, "GOOG", "2013-01-02", "2013-01-15").await?;
    println!("--- GOOG daily prices ({} trading days) ---", prices.len());
    for (date, row) in &prices {
        println!(
            "  {date}  O {:>8}  H {:>8}  L {:>8}  C {:>8}  V {:>9}  Adj {:>8}",
            row.open, row.high, row.low, row.close, row.volume, row.adj_close
        );
    }

    Ok(())
}
