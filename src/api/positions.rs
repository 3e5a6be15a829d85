//! Position endpoints

use super::{
    utils::{decode_data, decode_list, path_segment, with_query},
    ApiClient,
};
use crate::{
    error::{MudrexError, Result},
    types::{api::Pagination, positions::*},
};
use rust_decimal::Decimal;
use tracing::info;

/// Open position management
#[derive(Debug, Clone, Copy)]
pub struct PositionsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PositionsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List open positions
    pub async fn list_open(&self) -> Result<Vec<Position>> {
        let body = self.client.get("/positions").await?;
        decode_list(&body)
    }

    /// Get a position by ID
    pub async fn get(&self, position_id: &str) -> Result<Position> {
        let path = position_path(position_id)?;
        let body = self.client.get(&path).await?;
        decode_data(&body)
    }

    /// Close a position completely
    pub async fn close(&self, position_id: &str) -> Result<()> {
        let path = format!("{}/close", position_path(position_id)?);
        self.client.post(&path, None).await?;
        info!("position {} closed", position_id);
        Ok(())
    }

    /// Close part of a position
    pub async fn close_partial(&self, position_id: &str, quantity: Decimal) -> Result<()> {
        if quantity <= Decimal::ZERO {
            return Err(MudrexError::invalid_parameter(format!(
                "close quantity must be positive, got {}",
                quantity
            )));
        }

        let path = format!("{}/close", position_path(position_id)?);
        let request = serde_json::to_value(ClosePartialRequest { quantity })?;
        self.client.post(&path, Some(&request)).await?;
        info!("position {} reduced by {}", position_id, quantity);
        Ok(())
    }

    /// Flip a position from long to short or back
    pub async fn reverse(&self, position_id: &str) -> Result<()> {
        let path = format!("{}/reverse", position_path(position_id)?);
        self.client.post(&path, None).await?;
        info!("position {} reversed", position_id);
        Ok(())
    }

    /// Attach a stop loss or take profit to a position
    pub async fn set_risk_order(
        &self,
        position_id: &str,
        trigger_type: RiskOrderType,
        trigger_price: Decimal,
    ) -> Result<RiskOrder> {
        check_trigger_price(trigger_price)?;

        let path = format!("{}/risk-order", position_path(position_id)?);
        let request = serde_json::to_value(RiskOrderRequest {
            trigger_type,
            trigger_price,
        })?;
        let body = self.client.post(&path, Some(&request)).await?;
        decode_data(&body)
    }

    /// Attach a stop loss
    pub async fn set_stop_loss(&self, position_id: &str, trigger_price: Decimal) -> Result<RiskOrder> {
        self.set_risk_order(position_id, RiskOrderType::StopLoss, trigger_price)
            .await
    }

    /// Attach a take profit
    pub async fn set_take_profit(
        &self,
        position_id: &str,
        trigger_price: Decimal,
    ) -> Result<RiskOrder> {
        self.set_risk_order(position_id, RiskOrderType::TakeProfit, trigger_price)
            .await
    }

    /// Move the trigger price of an existing risk order
    pub async fn edit_risk_order(
        &self,
        position_id: &str,
        risk_order_id: &str,
        trigger_price: Decimal,
    ) -> Result<RiskOrder> {
        check_trigger_price(trigger_price)?;

        let path = format!(
            "{}/risk-order/{}",
            position_path(position_id)?,
            path_segment("risk_order_id", risk_order_id)?
        );
        let request = serde_json::to_value(EditRiskOrderRequest { trigger_price })?;
        let body = self.client.patch(&path, Some(&request)).await?;
        decode_data(&body)
    }

    /// Get closed positions
    pub async fn history(&self, pagination: &Pagination) -> Result<Vec<Position>> {
        let path = with_query("/positions/history", &pagination.query_params());
        let body = self.client.get(&path).await?;
        decode_list(&body)
    }
}

fn position_path(position_id: &str) -> Result<String> {
    Ok(format!(
        "/positions/{}",
        path_segment("position_id", position_id)?
    ))
}

fn check_trigger_price(trigger_price: Decimal) -> Result<()> {
    if trigger_price <= Decimal::ZERO {
        return Err(MudrexError::invalid_parameter(format!(
            "trigger price must be positive, got {}",
            trigger_price
        )));
    }
    Ok(())
}
