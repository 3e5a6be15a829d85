//! Wallet types for Mudrex API

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Wallet a transfer moves funds between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletType {
    /// Spot wallet
    Spot,
    /// Futures wallet
    Futures,
}

impl std::fmt::Display for WalletType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WalletType::Spot => write!(f, "SPOT"),
            WalletType::Futures => write!(f, "FUTURES"),
        }
    }
}

/// Spot wallet funds from /wallet/funds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletBalance {
    /// Total balance
    pub total: Decimal,
    /// Amount that can be withdrawn or transferred
    pub withdrawable: Decimal,
    /// Amount currently invested
    #[serde(default)]
    pub invested: Option<Decimal>,
    /// Rewards balance
    #[serde(default)]
    pub rewards: Option<Decimal>,
}

/// Futures wallet balance from /wallet/balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuturesBalance {
    /// Wallet balance
    pub balance: Decimal,
    /// Margin locked in open orders and positions
    #[serde(default)]
    pub locked_amount: Option<Decimal>,
    /// Unrealized profit and loss across open positions
    #[serde(default)]
    pub unrealized_pnl: Option<Decimal>,
}

impl FuturesBalance {
    /// Balance not locked as margin
    pub fn available(&self) -> Decimal {
        self.balance - self.locked_amount.unwrap_or_default()
    }
}

/// Transfer request body for /wallet/transfer
#[derive(Debug, Clone, Serialize)]
pub(crate) struct TransferRequest {
    pub from_wallet_type: WalletType,
    pub to_wallet_type: WalletType,
    pub amount: Decimal,
}

/// Result of a wallet transfer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferResult {
    /// Whether the transfer went through
    #[serde(default)]
    pub success: bool,
    /// Transfer identifier
    #[serde(default)]
    pub transaction_id: Option<String>,
    /// Transferred amount
    #[serde(default)]
    pub amount: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_transfer_request_shape() {
        let request = TransferRequest {
            from_wallet_type: WalletType::Spot,
            to_wallet_type: WalletType::Futures,
            amount: Decimal::from_str("12.5").unwrap(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["from_wallet_type"], "SPOT");
        assert_eq!(json["to_wallet_type"], "FUTURES");
        assert_eq!(json["amount"], "12.5");
    }

    #[test]
    fn test_futures_balance_accepts_strings_and_numbers() {
        let balance: FuturesBalance =
            serde_json::from_str(r#"{"balance":"100.5","locked_amount":20}"#).unwrap();
        assert_eq!(balance.available(), Decimal::from_str("80.5").unwrap());
    }
}
