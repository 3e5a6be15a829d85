//! # Mudrex Rust SDK
//!
//! A typed Rust client for the Mudrex futures trading API.
//!
//! ## Features
//!
//! - **Endpoint Groups**: wallet, assets, leverage, orders, positions and fees
//! - **Rate Limiting**: one shared limiter spaces every outbound request
//!   (2 requests/second by default)
//! - **Typed Errors**: transport failures are kept apart from API rejections,
//!   and API rejections carry a classified [`ApiErrorKind`]
//! - **Type Safety**: serde models with `Decimal` amounts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mudrex_rust_sdk::{ApiErrorKind, Config, MudrexClient, OrderSide};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MudrexClient::new(Config::new("your_api_secret")?)?;
//!
//!     // Check funds
//!     let balance = client.wallet().futures_balance().await?;
//!     println!("Available: {}", balance.available());
//!
//!     // Place an order
//!     let result = client
//!         .orders()
//!         .create_market_order(
//!             "BTCUSDT",              // asset
//!             OrderSide::Long,        // side
//!             Decimal::new(1, 3),     // quantity 0.001
//!             Decimal::from(5),       // leverage
//!         )
//!         .await;
//!
//!     match result {
//!         Ok(order) => println!("Order placed: {}", order.id),
//!         Err(e) if e.kind() == Some(ApiErrorKind::InsufficientBalance) => {
//!             println!("Top up the futures wallet first")
//!         }
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use api::{ApiClient, RateLimiter};
pub use client::MudrexClient;
pub use config::Config;
pub use error::{classify, ApiError, ApiErrorKind, MudrexError, Result};
pub use types::*;
