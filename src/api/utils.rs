//! Utility functions for API operations

use crate::{
    error::{MudrexError, Result},
    types::api::Envelope,
};
use serde::de::DeserializeOwned;

/// Join a base URL and a path without doubling or dropping the slash
pub fn join_url(base_url: &str, path: &str) -> String {
    if base_url.ends_with('/') && path.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    } else if !base_url.ends_with('/') && !path.starts_with('/') && !path.is_empty() {
        format!("{}/{}", base_url, path)
    } else {
        format!("{}{}", base_url, path)
    }
}

/// Append URL-encoded query parameters to a path
pub fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let mut url = path.to_string();
    url.push('?');
    for (i, (key, value)) in params.iter().enumerate() {
        if i > 0 {
            url.push('&');
        }
        url.push_str(&format!(
            "{}={}",
            urlencoding::encode(key),
            urlencoding::encode(value)
        ));
    }
    url
}

/// Encode a caller-supplied identifier as one path segment
pub fn path_segment(name: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(MudrexError::invalid_parameter(format!(
            "{} must not be empty",
            name
        )));
    }
    Ok(urlencoding::encode(value).into_owned())
}

/// Decode an envelope and take its `data` payload
pub fn decode_data<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let envelope: Envelope<T> = serde_json::from_slice(body)?;
    envelope
        .into_data()
        .ok_or_else(|| MudrexError::invalid_response("response envelope has no data"))
}

/// Decode a listing; `data: null` or a missing payload means an empty list
pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>> {
    let envelope: Envelope<Vec<T>> = serde_json::from_slice(body)?;
    Ok(envelope.into_data().unwrap_or_default())
}
