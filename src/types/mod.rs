//! Type definitions for Mudrex API

pub mod api;
pub mod assets;
pub mod constants;
pub mod fees;
pub mod leverage;
pub mod orders;
pub mod positions;
pub mod wallet;

// Re-export commonly used types
pub use api::*;
pub use assets::*;
pub use constants::*;
pub use fees::*;
pub use leverage::*;
pub use orders::*;
pub use positions::*;
pub use wallet::*;

use chrono::{DateTime, TimeZone, Utc};

/// Parse a venue timestamp: RFC 3339, or milliseconds since the Unix epoch
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    raw.parse::<i64>()
        .ok()
        .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
}
