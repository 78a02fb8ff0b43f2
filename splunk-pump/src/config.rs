//! Pump configuration decoding and validation
//!
//! The host hands the adapter an opaque, already-parsed configuration
//! value (JSON-shaped). This module decodes it into a typed
//! [`PumpConfig`] up front and fails fast on shape mismatches, instead
//! of poking at dynamic fields at send time.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Configuration parameters for the Splunk pump
///
/// Field names accept the snake_case form plus the camel/Pascal casings
/// hosts commonly emit (`tlsSkipVerify`, `TLSSkipVerify`).
#[derive(Debug, Clone, Deserialize)]
pub struct PumpConfig {
    /// HEC authentication token
    #[serde(default, alias = "Token")]
    pub token: String,

    /// Base URL of the collector; any path component is overwritten
    /// with the collector event path at client construction
    #[serde(default, alias = "Endpoint")]
    pub endpoint: String,

    /// Disable TLS certificate validation
    ///
    /// Intended only for development against self-signed endpoints.
    #[serde(default, alias = "tlsSkipVerify", alias = "TLSSkipVerify")]
    pub tls_skip_verify: bool,

    /// HTTP request timeout in seconds
    ///
    /// When unset, the underlying HTTP client's default applies and no
    /// explicit per-request deadline is enforced.
    #[serde(default, alias = "timeoutSecs")]
    pub timeout_secs: Option<u64>,
}

impl PumpConfig {
    /// Decode a host-supplied configuration value
    pub fn decode(raw: &serde_json::Value) -> Result<Self> {
        serde_json::from_value(raw.clone()).map_err(|e| Error::ConfigDecode(e.to_string()))
    }

    /// Validate configuration, returning an error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.token.is_empty() {
            return Err(Error::Settings("token is required".to_string()));
        }
        if self.endpoint.is_empty() {
            return Err(Error::Settings("endpoint is required".to_string()));
        }
        Ok(())
    }
}
