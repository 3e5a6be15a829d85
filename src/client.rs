//! Main client for Mudrex SDK
//!
//! Owns the transport and hands out one handle per endpoint group.

use crate::{
    api::{ApiClient, AssetsApi, FeesApi, LeverageApi, OrdersApi, PositionsApi, WalletApi},
    config::Config,
    error::Result,
};
use tracing::info;

/// Main client for Mudrex operations
///
/// Cheap to clone; clones share the connection pool and the rate limiter,
/// so one limiter governs every request made through any clone.
///
/// # Examples
///
/// ```rust,no_run
/// use mudrex_rust_sdk::{Config, MudrexClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = MudrexClient::new(Config::new("your_api_secret")?)?;
///     let balance = client.wallet().futures_balance().await?;
///     println!("Futures balance: {}", balance.balance);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct MudrexClient {
    api: ApiClient,
    config: Config,
}

impl MudrexClient {
    /// Create a new client
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::new(&config)?;
        info!("✅ Mudrex client initialized for {}", config.base_url);
        Ok(Self { api, config })
    }

    /// Create a client from `MUDREX_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Underlying transport, for endpoints this SDK does not wrap
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Wallet balances and transfers
    pub fn wallet(&self) -> WalletApi<'_> {
        WalletApi::new(&self.api)
    }

    /// Tradable assets
    pub fn assets(&self) -> AssetsApi<'_> {
        AssetsApi::new(&self.api)
    }

    /// Leverage and margin mode
    pub fn leverage(&self) -> LeverageApi<'_> {
        LeverageApi::new(&self.api)
    }

    /// Futures orders
    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi::new(&self.api)
    }

    /// Open positions and risk orders
    pub fn positions(&self) -> PositionsApi<'_> {
        PositionsApi::new(&self.api)
    }

    /// Fee history
    pub fn fees(&self) -> FeesApi<'_> {
        FeesApi::new(&self.api)
    }

    /// Shut the client down, releasing its pooled connections once no
    /// clone holds them any more
    pub fn close(self) {
        info!("Mudrex client closed");
        drop(self);
    }
}
