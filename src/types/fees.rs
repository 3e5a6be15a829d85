//! Fee types for Mudrex API

use super::parse_timestamp;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One charged fee from /fees
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeRecord {
    /// Record ID
    #[serde(default)]
    pub id: Option<String>,
    /// Asset the fee was charged on
    #[serde(default)]
    pub asset_id: Option<String>,
    /// Contract symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Fee amount
    pub fee_amount: Decimal,
    /// Fee category (e.g., trading, funding)
    #[serde(default)]
    pub fee_type: Option<String>,
    /// Order the fee belongs to
    #[serde(default)]
    pub order_id: Option<String>,
    /// Charge time as sent by the venue
    #[serde(default)]
    pub created_at: Option<String>,
}

impl FeeRecord {
    /// Parse the charge timestamp
    pub fn created_at_datetime(&self) -> Option<DateTime<Utc>> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }
}
