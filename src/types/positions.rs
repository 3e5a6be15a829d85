//! Position types for Mudrex API

use super::{orders::OrderSide, parse_timestamp};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Position status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionStatus {
    /// Position is open
    Open,
    /// Position was closed
    Closed,
    /// Position was liquidated
    Liquidated,
    /// Status this SDK does not know about
    #[serde(other)]
    Unknown,
}

/// Futures position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    /// Position ID
    pub id: String,
    /// Asset the position is in
    #[serde(default)]
    pub asset_id: Option<String>,
    /// Contract symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Long or short
    pub side: OrderSide,
    /// Position size
    pub quantity: Decimal,
    /// Average entry price
    pub entry_price: Decimal,
    /// Current mark price
    #[serde(default)]
    pub mark_price: Option<Decimal>,
    /// Leverage multiplier
    #[serde(default)]
    pub leverage: Option<Decimal>,
    /// Margin allocated to the position
    #[serde(default)]
    pub margin: Option<Decimal>,
    /// Liquidation price
    #[serde(default)]
    pub liquidation_price: Option<Decimal>,
    /// Unrealized profit and loss
    #[serde(default)]
    pub unrealized_pnl: Option<Decimal>,
    /// Realized profit and loss
    #[serde(default)]
    pub realized_pnl: Option<Decimal>,
    /// Position status
    #[serde(default = "default_status")]
    pub status: PositionStatus,
    /// Attached stop loss
    #[serde(default)]
    pub stoploss: Option<RiskOrder>,
    /// Attached take profit
    #[serde(default)]
    pub takeprofit: Option<RiskOrder>,
    /// Creation time as sent by the venue
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_status() -> PositionStatus {
    PositionStatus::Open
}

impl Position {
    /// Parse the creation timestamp
    pub fn created_at_datetime(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    /// Check if position is open
    pub fn is_open(&self) -> bool {
        self.status == PositionStatus::Open
    }
}

/// Kind of risk order attached to a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskOrderType {
    /// Close the position when price moves against it
    StopLoss,
    /// Close the position when price reaches a target
    TakeProfit,
}

impl std::fmt::Display for RiskOrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskOrderType::StopLoss => write!(f, "STOP_LOSS"),
            RiskOrderType::TakeProfit => write!(f, "TAKE_PROFIT"),
        }
    }
}

/// Stop loss or take profit order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskOrder {
    /// Risk order ID
    pub id: String,
    /// Stop loss or take profit
    pub trigger_type: RiskOrderType,
    /// Trigger price
    pub trigger_price: Decimal,
    /// Status as sent by the venue
    #[serde(default)]
    pub status: Option<String>,
}

/// Request body for POST /positions/{id}/risk-order
#[derive(Debug, Clone, Serialize)]
pub(crate) struct RiskOrderRequest {
    pub trigger_type: RiskOrderType,
    pub trigger_price: Decimal,
}

/// Request body for PATCH /positions/{id}/risk-order/{risk_order_id}
#[derive(Debug, Clone, Serialize)]
pub(crate) struct EditRiskOrderRequest {
    pub trigger_price: Decimal,
}

/// Request body for a partial close
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ClosePartialRequest {
    pub quantity: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_with_risk_orders() {
        let position: Position = serde_json::from_str(
            r#"{
                "id": "p1",
                "side": "LONG",
                "quantity": "0.5",
                "entry_price": 64000,
                "stoploss": {"id": "r1", "trigger_type": "STOP_LOSS", "trigger_price": "60000"}
            }"#,
        )
        .unwrap();
        assert!(position.is_open());
        assert_eq!(position.side, OrderSide::Long);
        let stoploss = position.stoploss.unwrap();
        assert_eq!(stoploss.trigger_type, RiskOrderType::StopLoss);
        assert!(position.takeprofit.is_none());
    }

    #[test]
    fn test_risk_order_request_shape() {
        let request = RiskOrderRequest {
            trigger_type: RiskOrderType::TakeProfit,
            trigger_price: Decimal::from(70000),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["trigger_type"], "TAKE_PROFIT");
        assert_eq!(json["trigger_price"], "70000");
    }
}
