//! Asset types for Mudrex API

use rust_decimal::Decimal;
use super::api::Pagination;
use serde::{Deserialize, Serialize};

/// Tradable futures contract from /assets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    /// Asset ID used in futures paths
    pub id: String,
    /// Contract symbol (e.g., "BTCUSDT")
    pub symbol: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Smallest order quantity
    #[serde(default)]
    pub min_contract: Option<Decimal>,
    /// Largest order quantity
    #[serde(default)]
    pub max_contract: Option<Decimal>,
    /// Quantity increment
    #[serde(default)]
    pub quantity_step: Option<Decimal>,
    /// Price increment
    #[serde(default)]
    pub price_step: Option<Decimal>,
    /// Lowest allowed leverage
    #[serde(default)]
    pub min_leverage: Option<Decimal>,
    /// Highest allowed leverage
    #[serde(default)]
    pub max_leverage: Option<Decimal>,
    /// Maker fee rate
    #[serde(default)]
    pub maker_fee: Option<Decimal>,
    /// Taker fee rate
    #[serde(default)]
    pub taker_fee: Option<Decimal>,
    /// Whether the contract can be traded
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Payload of the asset list endpoint
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AssetList {
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// Sort direction for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl SortOrder {
    /// Query-string value
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query parameters for listing assets
#[derive(Debug, Clone, Default)]
pub struct AssetListQuery {
    /// Page selection
    pub pagination: Pagination,
    /// Field to sort by (e.g., "popularity")
    pub sort_by: Option<String>,
    /// Sort direction
    pub sort_order: Option<SortOrder>,
}

impl AssetListQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page and page size
    pub fn page(mut self, page: u32, per_page: u32) -> Self {
        self.pagination = Pagination::new(page, per_page);
        self
    }

    /// Set sort field and direction
    pub fn sort(mut self, sort_by: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(sort_by.into());
        self.sort_order = Some(order);
        self
    }

    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = self.pagination.query_params();
        if let Some(sort_by) = self.sort_by.as_deref().filter(|s| !s.is_empty()) {
            params.push(("sort_by", sort_by.to_string()));
        }
        if let Some(order) = self.sort_order {
            params.push(("sort_order", order.as_str().to_string()));
        }
        params
    }
}
