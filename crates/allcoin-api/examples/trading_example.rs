/*
[INPUT]:  API key/secret from the environment and order parameters
[OUTPUT]: Account info, order creation and cancellation results
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use allcoin_api::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: Trading operations (requires signed requests)
///
/// Set ALLCOIN_API_KEY and ALLCOIN_API_SECRET before running.
#[tokio::main]
async fn main() {
    println!("=== Allcoin Trading Example ===\n");

    let (api_key, api_secret) = match (
        std::env::var("ALLCOIN_API_KEY"),
        std::env::var("ALLCOIN_API_SECRET"),
    ) {
        (Ok(key), Ok(secret)) => (key, secret),
        _ => {
            eprintln!("ALLCOIN_API_KEY and ALLCOIN_API_SECRET must be set");
            return;
        }
    };

    let client = match AllcoinClient::new(Credentials::new(api_key, api_secret)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created");

    match client.get_userinfo().await {
        Ok(info) => println!("✓ Account: {}", info["info"]["funds"]),
        Err(e) => println!("✗ Error: {}", e),
    }

    let price = Decimal::from_str("0.0123").unwrap_or_default();
    let amount = Decimal::from_str("1").unwrap_or_default();

    println!("\nPlacing buy order: {} eth_btc @ {}", amount, price);
    let order_id = match client.create_buy_order("eth_btc", price, amount).await {
        Ok(order) => {
            println!("✓ Order placed: {}", order);
            order["order_id"]
                .as_str()
                .and_then(|id| id.parse::<i64>().ok())
                .or_else(|| order["order_id"].as_i64())
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            None
        }
    };

    if let Some(order_id) = order_id {
        println!("\nCancelling order {}...", order_id);
        match client.cancel_order("eth_btc", &[order_id]).await {
            Ok(result) => println!("✓ Cancelled: {}", result),
            Err(e) if e.is_auth_error() => println!("✗ Credentials rejected: {}", e),
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    match client.get_open_orders("eth_btc").await {
        Ok(orders) => println!("\n✓ Open orders: {}", orders["orders"]),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
