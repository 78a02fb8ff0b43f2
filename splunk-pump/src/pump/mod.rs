//! Pump driver layer
//!
//! The host runtime discovers pumps behind the [`Pump`] trait: it asks
//! for a name, initializes the pump with an opaque configuration value,
//! and then hands it batches of opaque records to deliver. The host owns
//! scheduling, batching, and the process lifecycle; a pump only owns the
//! transport for its backend.

mod splunk;

pub use splunk::{DeliveryStats, SplunkPump};

use crate::error::Result;

/// Contract between the host pump runtime and a backend driver
///
/// A host registry typically holds drivers as `Box<dyn Pump>`.
pub trait Pump: Send {
    /// Human-readable driver name
    fn name(&self) -> &'static str;

    /// Decode the host-supplied configuration and prepare the transport
    ///
    /// A pump that fails initialization stays unusable; the host is
    /// expected not to call [`Pump::write_data`] on it.
    fn init(&mut self, config: &serde_json::Value) -> Result<()>;

    /// Deliver one batch of records, in input order
    fn write_data(&mut self, records: &[serde_json::Value]) -> Result<()>;
}
