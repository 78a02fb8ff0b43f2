//! # splunk-pump
//!
//! Pump driver that forwards API analytics records to a Splunk-compatible
//! HTTP Event Collector (HEC).
//!
//! The crate is consumed as a plugin by a data-pump host: the host
//! collects and batches records, then calls into this adapter through the
//! [`Pump`] trait to deliver each batch. Per record, the adapter projects
//! four fields (`api_id`, `path`, `method`, `response_code`) into a JSON
//! event and POSTs it to the collector endpoint.
//!
//! ## Example
//!
//! ```rust,no_run
//! use serde_json::json;
//! use splunk_pump::{Pump, SplunkPump};
//!
//! let mut pump = SplunkPump::new();
//! pump.init(&json!({
//!     "token": "00000000-0000-0000-0000-000000000000",
//!     "endpoint": "https://splunk.example.com:8088",
//! }))
//! .expect("failed to initialize pump");
//!
//! let records = vec![json!({
//!     "api_id": "payments",
//!     "path": "/charge",
//!     "method": "POST",
//!     "response_code": 201,
//! })];
//! pump.write_data(&records).expect("failed to deliver batch");
//! ```

// Re-export commonly used items at the crate root
pub use analytics::AnalyticsRecord;
pub use config::PumpConfig;
pub use error::{Error, Result};
pub use hec::HecClient;
pub use pump::{DeliveryStats, Pump, SplunkPump};

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod hec;
pub mod logging;
pub mod pump;
