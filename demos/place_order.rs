//! Place order example
//!
//! Sets leverage on an asset and places a small limit order, then cancels it.
//! Set `MUDREX_API_SECRET` before running.

use mudrex_rust_sdk::{ApiErrorKind, MarginType, MudrexClient, OrderRequest, OrderSide};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{error, info, warn};

const ASSET: &str = "BTCUSDT";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = MudrexClient::from_env()?;

    let asset = client.assets().get(ASSET).await?;
    info!("📊 {} max leverage: {:?}", asset.symbol, asset.max_leverage);

    let leverage = client
        .leverage()
        .set(ASSET, Decimal::from(5), MarginType::Isolated)
        .await?;
    info!("⚙️ Leverage set to {}x ({})", leverage.leverage, leverage.margin_type);

    let request = OrderRequest::limit(
        OrderSide::Long,
        Decimal::from_str("0.001")?,
        Decimal::from(30000),
        leverage.leverage,
    )
    .with_stop_loss(Decimal::from(28000));

    let order = match client.orders().create(ASSET, &request).await {
        Ok(order) => order,
        Err(e) if e.kind() == Some(ApiErrorKind::InsufficientBalance) => {
            warn!("💸 Not enough margin, transfer funds to the futures wallet first");
            return Ok(());
        }
        Err(e) => {
            error!("❌ Order failed: {}", e);
            return Err(e.into());
        }
    };
    info!("✅ Order {} is {:?}", order.id, order.status);

    for open in client.orders().list_open(ASSET).await? {
        info!("  - {} {} {} @ {:?}", open.id, open.order_type, open.quantity, open.price);
    }

    client.orders().cancel(ASSET, &order.id).await?;
    info!("🧹 Order {} canceled", order.id);

    Ok(())
}
