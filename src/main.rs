//! Command line front end: prints the most traded symbols of a market.
//!
//! ```text
//! screener [market] [column ...]
//! ```
//! Settings come from `screener.toml` and `SCREENER_*` variables; log output
//! is controlled by `RUST_LOG`.

use screener::{col, Query, Screener, ScreenerConfig};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        error!(error=%e, "screener failed");
        std::process::exit(1);
    }
}

async fn run() -> screener::Result<()> {
    let mut args = std::env::args().skip(1);
    let market = args.next();
    let columns: Vec<String> = args.collect();

    let config = ScreenerConfig::load(None)?;
    let mut query = Query::new();
    if let Some(market) = market {
        query.set_markets([market]);
    }
    query
        .select(columns)
        .where_([col("volume").not_empty()])
        .order_by("volume", false, false)
        .limit(20);

    let screener = Screener::new(config);
    let result = screener.scan(&query).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
