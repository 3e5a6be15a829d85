//! Constants used throughout the Mudrex SDK

/// Default endpoints and client settings
pub mod defaults {
    use std::time::Duration;

    /// Production futures API base URL
    pub const BASE_URL: &str = "https://trade.mudrex.com/fapi/v1";

    /// Timeout applied to each HTTP round trip
    pub const TIMEOUT: Duration = Duration::from_secs(30);

    /// Minimum spacing between two dispatched requests (2 requests/second)
    pub const RATE_LIMIT_INTERVAL: Duration = Duration::from_millis(500);
}

/// Request headers
pub mod headers {
    /// Header carrying the API secret
    pub const AUTHENTICATION: &str = "X-Authentication";
}

/// Environment variables read by `Config::from_env`
pub mod env {
    /// API secret
    pub const API_SECRET: &str = "MUDREX_API_SECRET";
    /// Base URL override
    pub const BASE_URL: &str = "MUDREX_BASE_URL";
    /// Timeout override, in whole seconds
    pub const TIMEOUT_SECS: &str = "MUDREX_TIMEOUT_SECS";
}

/// Error codes with special meaning
pub mod error_codes {
    /// Code assigned when the error body is not a valid envelope
    pub const UNKNOWN: i32 = -1;

    /// Venue code for insufficient balance
    pub const INSUFFICIENT_BALANCE: i32 = 1002;
}
