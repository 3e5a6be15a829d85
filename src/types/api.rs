//! Response envelope shared by every endpoint

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Generic API response wrapper
///
/// Every response body, successful or not, has this shape. `data` is left
/// opaque until a resource module decodes it into its own type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    /// Response payload
    pub data: Option<T>,
    /// Human-readable message
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    /// Structured error (failed calls only)
    #[serde(default)]
    pub error: Option<ErrorDetail>,
}

/// Structured error carried inside an [`Envelope`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Venue error code, zero when absent
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: i32,
    /// Error message
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

impl<T> Envelope<T> {
    /// Take the payload out of the envelope
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Page selection for paginated endpoints
///
/// Unset fields are left out of the query string so the venue applies its
/// own defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub page: Option<u32>,
    /// Items per page
    pub per_page: Option<u32>,
}

impl Pagination {
    /// Select a page and page size
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page.filter(|p| *p > 0) {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page.filter(|p| *p > 0) {
            params.push(("per_page", per_page.to_string()));
        }
        params
    }
}

// Missing and `null` fields both decode to the zero value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
