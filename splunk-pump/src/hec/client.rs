//! HTTP client for the Splunk HTTP Event Collector
//!
//! One client is built per pump instance at initialization and reused
//! for every event; nothing here touches process-global state.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::error::{Error, Result};

use super::event::{Event, EventEnvelope};

/// Collector API path, overriding whatever path the endpoint carries
const COLLECTOR_PATH: &str = "/services/collector/event/1.0";

/// HEC authorization scheme prefix
const AUTH_PREFIX: &str = "Splunk ";

/// HTTP client for the HEC events endpoint
pub struct HecClient {
    endpoint: Url,
    http_client: reqwest::Client,
}

impl HecClient {
    /// Create a new client
    ///
    /// Validates the settings, normalizes the endpoint by replacing its
    /// path with the collector event path, and builds the underlying
    /// HTTP client. No network I/O happens here.
    pub fn new(token: &str, endpoint: &str, skip_verify: bool) -> Result<Self> {
        Self::with_timeout(token, endpoint, skip_verify, None)
    }

    /// Create a new client with an explicit per-request timeout
    ///
    /// `timeout == None` leaves the underlying client's default in
    /// place, so no per-request deadline is enforced.
    pub fn with_timeout(
        token: &str,
        endpoint: &str,
        skip_verify: bool,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        if token.is_empty() || endpoint.is_empty() {
            return Err(Error::Settings(
                "token and endpoint must be non-empty".to_string(),
            ));
        }

        let mut url = Url::parse(endpoint)?;
        url.set_path(COLLECTOR_PATH);

        // Build default headers
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let auth_value = format!("{}{}", AUTH_PREFIX, token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value)
                .map_err(|e| Error::Settings(format!("invalid token: {}", e)))?,
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);

        if skip_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| Error::Settings(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: url,
            http_client,
        })
    }

    /// Send one event to the collector
    ///
    /// Returns the raw HTTP response, non-2xx included. Status
    /// interpretation and retries belong to the caller.
    pub async fn send(&self, event: &Event) -> Result<reqwest::Response> {
        let body = serde_json::to_vec(&EventEnvelope { event })?;

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .body(body)
            .send()
            .await?;

        Ok(response)
    }

    /// The fully-resolved collector endpoint URL
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}
