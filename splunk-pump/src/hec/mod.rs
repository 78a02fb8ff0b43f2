//! Splunk HTTP Event Collector transport
//!
//! This module implements the HEC wire protocol: each event is wrapped
//! in an `{"event": ...}` envelope and POSTed to
//! `/services/collector/event/1.0` with a `Splunk` authorization header.
//!
//! The client is deliberately status-blind: it returns the raw HTTP
//! response, including non-2xx codes, and leaves interpretation to the
//! caller. It never retries.

mod client;
mod event;

pub use client::HecClient;
pub use event::{project_record, Event};
