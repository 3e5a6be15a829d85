//! Position management example
//!
//! Lists open positions, attaches a take profit to each and prints recent fees.
//! Set `MUDREX_API_SECRET` before running.

use mudrex_rust_sdk::{MudrexClient, OrderSide, Pagination};
use rust_decimal::Decimal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = MudrexClient::from_env()?;

    let positions = client.positions().list_open().await?;
    info!("📋 Open positions: {}", positions.len());

    for position in positions {
        info!(
            "  - {} {} {} @ {} (pnl {:?})",
            position.id,
            position.side,
            position.quantity,
            position.entry_price,
            position.unrealized_pnl
        );

        if position.takeprofit.is_some() {
            continue;
        }

        // 5% away from entry, in the profitable direction
        let step = position.entry_price / Decimal::from(20);
        let target = match position.side {
            OrderSide::Long => position.entry_price + step,
            OrderSide::Short => position.entry_price - step,
        };

        match client.positions().set_take_profit(&position.id, target).await {
            Ok(risk_order) => info!("🎯 Take profit {} at {}", risk_order.id, risk_order.trigger_price),
            Err(e) => error!("❌ Failed to set take profit on {}: {}", position.id, e),
        }
    }

    let fees = client.fees().history(&Pagination::new(1, 10)).await?;
    for fee in fees {
        info!("🧾 {:?} {} {:?}", fee.fee_type, fee.fee_amount, fee.created_at_datetime());
    }

    Ok(())
}
