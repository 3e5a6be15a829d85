//! Asset endpoints

use super::{
    utils::{decode_data, path_segment, with_query},
    ApiClient,
};
use crate::{error::Result, types::assets::*};

/// Tradable asset lookups
#[derive(Debug, Clone, Copy)]
pub struct AssetsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AssetsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List tradable assets
    pub async fn list(&self, query: &AssetListQuery) -> Result<Vec<Asset>> {
        let path = with_query("/assets", &query.query_params());
        let body = self.client.get(&path).await?;
        let list: AssetList = decode_data(&body)?;
        Ok(list.assets)
    }

    /// Get a single asset
    pub async fn get(&self, asset_id: &str) -> Result<Asset> {
        let path = format!("/assets/{}", path_segment("asset_id", asset_id)?);
        let body = self.client.get(&path).await?;
        decode_data(&body)
    }
}
