//! Order endpoints

use super::{
    utils::{decode_data, decode_list, path_segment, with_query},
    ApiClient,
};
use crate::{
    error::{MudrexError, Result},
    types::{api::Pagination, orders::*},
};
use rust_decimal::Decimal;
use tracing::info;

/// Futures order placement and management
#[derive(Debug, Clone, Copy)]
pub struct OrdersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OrdersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Submit an order
    pub async fn create(&self, asset_id: &str, order: &OrderRequest) -> Result<Order> {
        order.validate()?;

        let path = format!("/futures/{}/order", path_segment("asset_id", asset_id)?);
        let request = serde_json::to_value(order)?;
        let body = self.client.post(&path, Some(&request)).await?;
        let created: Order = decode_data(&body)?;
        info!(
            "order {} placed: {} {} {}",
            created.id, order.trigger_type, order.order_type, order.quantity
        );
        Ok(created)
    }

    /// Submit a market order
    pub async fn create_market_order(
        &self,
        asset_id: &str,
        side: OrderSide,
        quantity: Decimal,
        leverage: Decimal,
    ) -> Result<Order> {
        self.create(asset_id, &OrderRequest::market(side, quantity, leverage))
            .await
    }

    /// Submit a limit order
    pub async fn create_limit_order(
        &self,
        asset_id: &str,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
        leverage: Decimal,
    ) -> Result<Order> {
        self.create(
            asset_id,
            &OrderRequest::limit(side, quantity, price, leverage),
        )
        .await
    }

    /// List open orders for an asset
    pub async fn list_open(&self, asset_id: &str) -> Result<Vec<Order>> {
        let path = format!("/futures/{}/orders", path_segment("asset_id", asset_id)?);
        let body = self.client.get(&path).await?;
        decode_list(&body)
    }

    /// Get order by ID
    pub async fn get(&self, asset_id: &str, order_id: &str) -> Result<Order> {
        let path = order_path(asset_id, order_id)?;
        let body = self.client.get(&path).await?;
        decode_data(&body)
    }

    /// Get order history for an asset
    pub async fn history(&self, asset_id: &str, pagination: &Pagination) -> Result<Vec<Order>> {
        let path = with_query(
            &format!(
                "/futures/{}/orders/history",
                path_segment("asset_id", asset_id)?
            ),
            &pagination.query_params(),
        );
        let body = self.client.get(&path).await?;
        decode_list(&body)
    }

    /// Cancel an order
    pub async fn cancel(&self, asset_id: &str, order_id: &str) -> Result<()> {
        let path = order_path(asset_id, order_id)?;
        self.client.delete(&path, None).await?;
        info!("order {} canceled", order_id);
        Ok(())
    }

    /// Change the price and quantity of an open order
    pub async fn amend(
        &self,
        asset_id: &str,
        order_id: &str,
        price: Decimal,
        quantity: Decimal,
    ) -> Result<Order> {
        if price <= Decimal::ZERO || quantity <= Decimal::ZERO {
            return Err(MudrexError::invalid_parameter(format!(
                "price and quantity must be positive, got {} and {}",
                price, quantity
            )));
        }

        let path = order_path(asset_id, order_id)?;
        let request = serde_json::to_value(AmendOrderRequest { price, quantity })?;
        let body = self.client.patch(&path, Some(&request)).await?;
        decode_data(&body)
    }
}

fn order_path(asset_id: &str, order_id: &str) -> Result<String> {
    Ok(format!(
        "/futures/{}/order/{}",
        path_segment("asset_id", asset_id)?,
        path_segment("order_id", order_id)?
    ))
}
