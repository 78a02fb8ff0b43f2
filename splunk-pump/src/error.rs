//! Error types for splunk-pump

use thiserror::Error;

/// Main error type for the splunk-pump library
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or empty required setting (token, endpoint)
    #[error("invalid settings: {0}")]
    Settings(String),

    /// Endpoint string is not a parseable URL
    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    /// Host-supplied configuration does not match the expected shape
    #[error("config decode error: {0}")]
    ConfigDecode(String),

    /// Event payload cannot be JSON-encoded
    #[error("event serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Network-level failure while sending an event
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Input record does not match the analytics record shape
    ///
    /// This is a contract violation between host and adapter, not a
    /// runtime condition to recover from.
    #[error("record type error: {0}")]
    Record(String),

    /// Aggregate outcome of a batch where at least one delivery failed
    #[error("{failed} of {attempted} events failed to deliver")]
    Delivery { failed: usize, attempted: usize },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the splunk-pump library
pub type Result<T> = std::result::Result<T, Error>;
