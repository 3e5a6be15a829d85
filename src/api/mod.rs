//! REST transport and endpoint groups

pub mod assets;
pub mod client;
pub mod fees;
pub mod leverage;
pub mod orders;
pub mod positions;
pub mod rate_limiter;
pub mod utils;
pub mod wallet;

pub use assets::AssetsApi;
pub use client::ApiClient;
pub use fees::FeesApi;
pub use leverage::LeverageApi;
pub use orders::OrdersApi;
pub use positions::PositionsApi;
pub use rate_limiter::RateLimiter;
pub use wallet::WalletApi;
