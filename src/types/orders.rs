//! Order-related types for Mudrex API

use super::parse_timestamp;
use crate::error::{MudrexError, Result};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order direction (sent as `order_type` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    /// Open or add to a long position
    Long,
    /// Open or add to a short position
    Short,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Long => write!(f, "LONG"),
            OrderSide::Short => write!(f, "SHORT"),
        }
    }
}

impl OrderSide {
    /// The side that closes a position opened on this side
    pub fn opposite(&self) -> Self {
        match self {
            OrderSide::Long => OrderSide::Short,
            OrderSide::Short => OrderSide::Long,
        }
    }
}

/// How the order is triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TriggerType {
    /// Fill at the best available price
    Market,
    /// Rest at a limit price
    Limit,
}

impl std::fmt::Display for TriggerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriggerType::Market => write!(f, "MARKET"),
            TriggerType::Limit => write!(f, "LIMIT"),
        }
    }
}

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Accepted, not yet filled
    Open,
    /// Partially filled
    PartiallyFilled,
    /// Completely filled
    Filled,
    /// Canceled
    Cancelled,
    /// Rejected by the venue
    Rejected,
    /// Status this SDK does not know about
    #[serde(other)]
    Unknown,
}

/// Request body for POST /futures/{asset_id}/order
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    /// Leverage multiplier
    pub leverage: Decimal,
    /// Order quantity
    pub quantity: Decimal,
    /// Limit price (limit orders only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Order direction
    pub order_type: OrderSide,
    /// Market or limit
    pub trigger_type: TriggerType,
    /// Stop loss trigger price attached to the resulting position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stoploss_price: Option<Decimal>,
    /// Take profit trigger price attached to the resulting position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub takeprofit_price: Option<Decimal>,
    /// Only reduce an existing position
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub reduce_only: bool,
}

impl OrderRequest {
    /// Market order
    pub fn market(side: OrderSide, quantity: Decimal, leverage: Decimal) -> Self {
        Self {
            leverage,
            quantity,
            price: None,
            order_type: side,
            trigger_type: TriggerType::Market,
            stoploss_price: None,
            takeprofit_price: None,
            reduce_only: false,
        }
    }

    /// Limit order
    pub fn limit(side: OrderSide, quantity: Decimal, price: Decimal, leverage: Decimal) -> Self {
        Self {
            price: Some(price),
            trigger_type: TriggerType::Limit,
            ..Self::market(side, quantity, leverage)
        }
    }

    /// Attach a stop loss
    pub fn with_stop_loss(mut self, price: Decimal) -> Self {
        self.stoploss_price = Some(price);
        self
    }

    /// Attach a take profit
    pub fn with_take_profit(mut self, price: Decimal) -> Self {
        self.takeprofit_price = Some(price);
        self
    }

    /// Mark the order reduce-only
    pub fn reduce_only(mut self) -> Self {
        self.reduce_only = true;
        self
    }

    /// Check the request before sending it
    pub fn validate(&self) -> Result<()> {
        if self.quantity <= Decimal::ZERO {
            return Err(MudrexError::invalid_parameter(format!(
                "quantity must be positive, got {}",
                self.quantity
            )));
        }
        if self.leverage <= Decimal::ZERO {
            return Err(MudrexError::invalid_parameter(format!(
                "leverage must be positive, got {}",
                self.leverage
            )));
        }
        match (self.trigger_type, self.price) {
            (TriggerType::Limit, None) => Err(MudrexError::invalid_parameter(
                "limit orders require a price",
            )),
            (TriggerType::Limit, Some(price)) if price <= Decimal::ZERO => Err(
                MudrexError::invalid_parameter(format!("price must be positive, got {}", price)),
            ),
            _ => Ok(()),
        }
    }
}

/// Request body for PATCH /futures/{asset_id}/order/{order_id}
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AmendOrderRequest {
    pub price: Decimal,
    pub quantity: Decimal,
}

/// Order information from API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order ID
    pub id: String,
    /// Asset the order trades
    #[serde(default)]
    pub asset_id: Option<String>,
    /// Contract symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Order direction
    pub order_type: OrderSide,
    /// Market or limit
    pub trigger_type: TriggerType,
    /// Order status
    pub status: OrderStatus,
    /// Order quantity
    pub quantity: Decimal,
    /// Filled quantity
    #[serde(default)]
    pub filled_quantity: Option<Decimal>,
    /// Limit price
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Leverage multiplier
    #[serde(default)]
    pub leverage: Option<Decimal>,
    /// Creation time as sent by the venue
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last update time as sent by the venue
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Order {
    /// Parse the creation timestamp
    pub fn created_at_datetime(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    /// Parse the update timestamp
    pub fn updated_at_datetime(&self) -> Option<DateTime<Utc>> {
        self.updated_at.as_deref().and_then(parse_timestamp)
    }

    /// Check if order is filled
    pub fn is_filled(&self) -> bool {
        self.status == OrderStatus::Filled
    }

    /// Check if order is canceled
    pub fn is_canceled(&self) -> bool {
        self.status == OrderStatus::Cancelled
    }

    /// Check if order is still working (OPEN or PARTIALLY_FILLED)
    pub fn is_active(&self) -> bool {
        matches!(self.status, OrderStatus::Open | OrderStatus::PartiallyFilled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_market_order_body() {
        let request = OrderRequest::market(OrderSide::Long, dec("0.01"), dec("5"));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "leverage": "5",
                "quantity": "0.01",
                "order_type": "LONG",
                "trigger_type": "MARKET",
            })
        );
    }

    #[test]
    fn test_limit_order_body_with_risk() {
        let request = OrderRequest::limit(OrderSide::Short, dec("1"), dec("2500.5"), dec("10"))
            .with_stop_loss(dec("2600"))
            .reduce_only();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["price"], "2500.5");
        assert_eq!(json["trigger_type"], "LIMIT");
        assert_eq!(json["stoploss_price"], "2600");
        assert_eq!(json["reduce_only"], true);
        assert!(json.get("takeprofit_price").is_none());
    }

    #[test]
    fn test_validate() {
        assert!(OrderRequest::market(OrderSide::Long, dec("1"), dec("2"))
            .validate()
            .is_ok());
        assert!(matches!(
            OrderRequest::market(OrderSide::Long, dec("0"), dec("2")).validate(),
            Err(MudrexError::InvalidParameter(_))
        ));

        let mut limit = OrderRequest::limit(OrderSide::Long, dec("1"), dec("100"), dec("2"));
        limit.price = None;
        match limit.validate() {
            Err(MudrexError::InvalidParameter(msg)) => {
                assert_eq!(msg, "limit orders require a price")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_order_status_unknown_variant() {
        let order: Order = serde_json::from_str(
            r#"{"id":"o1","order_type":"SHORT","trigger_type":"LIMIT","status":"PENDING_TRIGGER","quantity":"2","created_at":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Unknown);
        assert!(!order.is_active());
        assert!(order.created_at_datetime().is_some());
        assert!(order.updated_at_datetime().is_none());
    }

    #[test]
    fn test_opposite_side() {
        assert_eq!(OrderSide::Long.opposite(), OrderSide::Short);
        assert_eq!(OrderSide::Short.to_string(), "SHORT");
    }
}
