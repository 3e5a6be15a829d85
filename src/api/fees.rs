//! Fee endpoints

use super::{
    utils::{decode_list, with_query},
    ApiClient,
};
use crate::{
    error::Result,
    types::{api::Pagination, fees::FeeRecord},
};

/// Trading fee history
#[derive(Debug, Clone, Copy)]
pub struct FeesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> FeesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Get charged fees
    pub async fn history(&self, pagination: &Pagination) -> Result<Vec<FeeRecord>> {
        let path = with_query("/fees", &pagination.query_params());
        let body = self.client.get(&path).await?;
        decode_list(&body)
    }
}
