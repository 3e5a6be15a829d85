//! Wallet endpoints

use super::{utils::decode_data, ApiClient};
use crate::{
    error::{MudrexError, Result},
    types::wallet::*,
};
use rust_decimal::Decimal;

/// Spot and futures wallet operations
#[derive(Debug, Clone, Copy)]
pub struct WalletApi<'a> {
    client: &'a ApiClient,
}

impl<'a> WalletApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Get spot wallet funds
    pub async fn spot_balance(&self) -> Result<WalletBalance> {
        let body = self.client.get("/wallet/funds").await?;
        decode_data(&body)
    }

    /// Get futures wallet balance
    pub async fn futures_balance(&self) -> Result<FuturesBalance> {
        let body = self.client.get("/wallet/balance").await?;
        decode_data(&body)
    }

    /// Move funds between the spot and futures wallets
    pub async fn transfer(
        &self,
        from: WalletType,
        to: WalletType,
        amount: Decimal,
    ) -> Result<TransferResult> {
        if from == to {
            return Err(MudrexError::invalid_parameter(format!(
                "cannot transfer from {} to itself",
                from
            )));
        }
        if amount <= Decimal::ZERO {
            return Err(MudrexError::invalid_parameter(format!(
                "transfer amount must be positive, got {}",
                amount
            )));
        }

        let request = serde_json::to_value(TransferRequest {
            from_wallet_type: from,
            to_wallet_type: to,
            amount,
        })?;
        let body = self.client.post("/wallet/transfer", Some(&request)).await?;
        decode_data(&body)
    }

    /// Move funds from spot to futures
    pub async fn transfer_to_futures(&self, amount: Decimal) -> Result<TransferResult> {
        self.transfer(WalletType::Spot, WalletType::Futures, amount).await
    }

    /// Move funds from futures to spot
    pub async fn transfer_to_spot(&self, amount: Decimal) -> Result<TransferResult> {
        self.transfer(WalletType::Futures, WalletType::Spot, amount).await
    }
}
