//! Get balance example
//!
//! This example fetches spot and futures wallet balances.
//! Set `MUDREX_API_SECRET` before running.

use mudrex_rust_sdk::MudrexClient;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("🚀 Starting Mudrex balance example");

    let client = MudrexClient::from_env()?;

    match client.wallet().spot_balance().await {
        Ok(balance) => info!(
            "💰 Spot: total={} withdrawable={}",
            balance.total, balance.withdrawable
        ),
        Err(e) => error!("❌ Failed to get spot balance: {}", e),
    }

    match client.wallet().futures_balance().await {
        Ok(balance) => info!(
            "📈 Futures: balance={} available={}",
            balance.balance,
            balance.available()
        ),
        Err(e) => error!("❌ Failed to get futures balance: {}", e),
    }

    client.close();
    Ok(())
}
