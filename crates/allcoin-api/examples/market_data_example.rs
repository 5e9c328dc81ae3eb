/*
[INPUT]:  Symbol identifier (e.g., "eth_btc")
[OUTPUT]: Market data (ticker, depth, trades, klines)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use allcoin_api::*;

/// Example: Query market data (no signature required)
///
/// Public endpoints only need a client; the credentials are never used.
#[tokio::main]
async fn main() {
    println!("=== Allcoin Market Data Example ===\n");

    let client = match AllcoinClient::new(Credentials::new("", "")) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let symbol = "eth_btc";

    println!("Querying ticker for {}...", symbol);
    match client.get_ticker(symbol).await {
        Ok(ticker) => println!("✓ Ticker: {}", ticker),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying order book for {}...", symbol);
    match client.get_order_book(symbol, Some(5), None).await {
        Ok(depth) => println!("✓ Depth: {}", depth),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying recent trades for {}...", symbol);
    match client.get_trades(symbol, None).await {
        Ok(trades) => println!("✓ Trades: {}", trades),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying hourly klines for {}...", symbol);
    match client.get_klines(symbol, KlineType::OneHour, Some(10), None).await {
        Ok(klines) => println!("✓ Klines: {}", klines),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
