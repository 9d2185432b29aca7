/*
[INPUT]:  Symbol name from the command line
[OUTPUT]: Connectivity check, listed symbol count and latest price
[POS]:    Examples - public market data
[UPDATE]: When public API changes
*/

use futures_testnet_adapter::*;

/// Example: public endpoints (no credentials required)
#[tokio::main]
async fn main() {
    let symbol = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "BTCUSDT".to_string())
        .to_uppercase();

    println!("=== Futures Testnet Market Data Example ===\n");

    let client = match FuturesClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    if let Err(e) = client.ping().await {
        eprintln!("Ping failed: {}", e);
        return;
    }
    println!("✓ Testnet reachable");

    match client.symbol_set().await {
        Ok(symbols) => {
            println!("✓ {} symbols listed", symbols.len());
            if !symbols.contains(&symbol) {
                println!("  {} is not listed", symbol);
                return;
            }
        }
        Err(e) => {
            eprintln!("Failed to fetch exchange info: {}", e);
            return;
        }
    }

    match client.symbol_price(&symbol).await {
        Ok(price) => println!("✓ {} last price: {}", price.symbol, price.price),
        Err(e) => eprintln!("Failed to fetch price: {}", e),
    }
}
