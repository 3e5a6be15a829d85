//! Transport for the Mudrex REST API

use super::{rate_limiter::RateLimiter, utils::join_url};
use crate::{
    config::Config,
    error::{classify, MudrexError, Result},
    types::constants::headers,
};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client as HttpClient, Method,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Mudrex API transport
///
/// Every call waits on the shared [`RateLimiter`], performs exactly one HTTP
/// round trip and either returns the raw response body (status < 400) or a
/// single error. Clones share the connection pool and the limiter.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// HTTP client
    http_client: HttpClient,
    /// Base API URL
    base_url: String,
    /// Authentication header value
    auth_header: HeaderValue,
    /// Spacing between dispatched requests
    rate_limiter: Arc<RateLimiter>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: &Config) -> Result<Self> {
        let mut auth_header = HeaderValue::from_str(config.api_secret())
            .map_err(|_| MudrexError::config("API secret contains invalid header characters"))?;
        auth_header.set_sensitive(true);

        let http_client = HttpClient::builder()
            .timeout(config.timeout)
            .default_headers({
                let mut headers = HeaderMap::new();
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                headers
            })
            .build()
            .map_err(|e| MudrexError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.to_string(),
            auth_header,
            rate_limiter: Arc::new(RateLimiter::new(config.rate_limit_interval)),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shared rate limiter
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Vec<u8>> {
        self.request(Method::GET, path, None).await
    }

    /// Make a POST request
    pub async fn post(&self, path: &str, body: Option<&Value>) -> Result<Vec<u8>> {
        self.request(Method::POST, path, body).await
    }

    /// Make a PATCH request
    pub async fn patch(&self, path: &str, body: Option<&Value>) -> Result<Vec<u8>> {
        self.request(Method::PATCH, path, body).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str, body: Option<&Value>) -> Result<Vec<u8>> {
        self.request(Method::DELETE, path, body).await
    }

    async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Vec<u8>> {
        let url = join_url(&self.base_url, path);

        self.rate_limiter.wait().await;

        debug!("{} {}", method, url);
        let mut request = self
            .http_client
            .request(method.clone(), &url)
            .header(headers::AUTHENTICATION, self.auth_header.clone());

        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.as_u16() >= 400 {
            let err = classify(status.as_u16(), &bytes);
            warn!("{} {} failed: {}", method, url, err);
            return Err(MudrexError::Api(err));
        }

        Ok(bytes.to_vec())
    }
}
