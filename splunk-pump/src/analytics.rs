//! Analytics record shape consumed from the host
//!
//! The host pump hands batches of opaque record values to the adapter.
//! Real records carry many more fields than the four this pump forwards;
//! the extras are modeled where decoding them is cheap and everything
//! else is ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Error, Result};

/// One observed API transaction, as produced by the host's gateway
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsRecord {
    /// API identifier
    pub api_id: String,

    /// Request path
    pub path: String,

    /// HTTP method
    pub method: String,

    /// Upstream response status code
    pub response_code: u16,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub api_name: Option<String>,

    #[serde(default)]
    pub api_version: Option<String>,

    #[serde(default)]
    pub org_id: Option<String>,

    #[serde(default)]
    pub ip_address: Option<String>,

    #[serde(default)]
    pub user_agent: Option<String>,

    /// When the transaction was observed
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Total request handling time in milliseconds
    #[serde(default)]
    pub request_time: Option<i64>,
}

impl AnalyticsRecord {
    /// Interpret an opaque host record as an analytics record
    ///
    /// A record that does not match the expected shape is a contract
    /// violation between host and adapter.
    pub fn from_value(raw: &serde_json::Value) -> Result<Self> {
        serde_json::from_value(raw.clone()).map_err(|e| Error::Record(e.to_string()))
    }
}
