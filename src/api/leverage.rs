//! Leverage endpoints

use super::{
    utils::{decode_data, path_segment},
    ApiClient,
};
use crate::{
    error::{MudrexError, Result},
    types::leverage::*,
};
use rust_decimal::Decimal;

/// Per-asset leverage and margin mode
#[derive(Debug, Clone, Copy)]
pub struct LeverageApi<'a> {
    client: &'a ApiClient,
}

impl<'a> LeverageApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Get the current leverage for an asset
    pub async fn get(&self, asset_id: &str) -> Result<Leverage> {
        let path = leverage_path(asset_id)?;
        let body = self.client.get(&path).await?;
        decode_data(&body)
    }

    /// Set leverage and margin mode for an asset
    pub async fn set(
        &self,
        asset_id: &str,
        leverage: Decimal,
        margin_type: MarginType,
    ) -> Result<Leverage> {
        if leverage <= Decimal::ZERO {
            return Err(MudrexError::invalid_parameter(format!(
                "leverage must be positive, got {}",
                leverage
            )));
        }

        let path = leverage_path(asset_id)?;
        let request = serde_json::to_value(SetLeverageRequest {
            leverage,
            margin_type,
        })?;
        let body = self.client.patch(&path, Some(&request)).await?;
        decode_data(&body)
    }
}

fn leverage_path(asset_id: &str) -> Result<String> {
    Ok(format!(
        "/futures/{}/leverage",
        path_segment("asset_id", asset_id)?
    ))
}
