//! Leverage types for Mudrex API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Margin mode for a futures contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarginType {
    /// Margin is isolated per position
    Isolated,
    /// Margin is shared across positions
    Cross,
}

impl std::fmt::Display for MarginType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarginType::Isolated => write!(f, "ISOLATED"),
            MarginType::Cross => write!(f, "CROSS"),
        }
    }
}

/// Leverage settings for an asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leverage {
    /// Leverage multiplier
    pub leverage: Decimal,
    /// Margin mode
    pub margin_type: MarginType,
    /// Asset the setting applies to
    #[serde(default)]
    pub asset_id: Option<String>,
}

/// Request body for PATCH /futures/{asset_id}/leverage
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SetLeverageRequest {
    pub leverage: Decimal,
    pub margin_type: MarginType,
}
