//! Splunk HEC pump driver
//!
//! Projects each analytics record onto a four-field event and delivers
//! it through [`HecClient`]. The host-facing API is blocking; the async
//! client runs on a current-thread runtime owned by the pump instance.

use std::time::Duration;

use crate::analytics::AnalyticsRecord;
use crate::config::PumpConfig;
use crate::error::{Error, Result};
use crate::hec::{project_record, HecClient};

use super::Pump;

const PUMP_NAME: &str = "Splunk Pump";

/// Delivery statistics accumulated across batches
#[derive(Debug, Default, Clone)]
pub struct DeliveryStats {
    /// Events accepted by the collector
    pub events_sent: usize,
    /// Events that failed to deliver (transport error or non-2xx)
    pub events_failed: usize,
    /// Batches handed over by the host
    pub batches: usize,
}

/// Pump driver for the Splunk HTTP Event Collector
pub struct SplunkPump {
    config: Option<PumpConfig>,
    client: Option<HecClient>,
    runtime: Option<tokio::runtime::Runtime>,
    stats: DeliveryStats,
}

impl SplunkPump {
    /// Create an uninitialized pump
    pub fn new() -> Self {
        Self {
            config: None,
            client: None,
            runtime: None,
            stats: DeliveryStats::default(),
        }
    }

    /// Delivery statistics accumulated so far
    pub fn stats(&self) -> &DeliveryStats {
        &self.stats
    }

    /// Decoded configuration, available once initialized
    pub fn config(&self) -> Option<&PumpConfig> {
        self.config.as_ref()
    }
}

fn not_initialized() -> Error {
    Error::Settings("pump is not initialized".to_string())
}

impl Default for SplunkPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Pump for SplunkPump {
    fn name(&self) -> &'static str {
        PUMP_NAME
    }

    fn init(&mut self, config: &serde_json::Value) -> Result<()> {
        let config = PumpConfig::decode(config)?;
        config.validate()?;

        let client = HecClient::with_timeout(
            &config.token,
            &config.endpoint,
            config.tls_skip_verify,
            config.timeout_secs.map(Duration::from_secs),
        )?;

        tracing::info!(
            target: "splunk-pump",
            endpoint = client.endpoint(),
            "{} endpoint configured",
            PUMP_NAME
        );

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        self.config = Some(config);
        self.client = Some(client);
        self.runtime = Some(runtime);

        tracing::debug!(target: "splunk-pump", "{} initialized", PUMP_NAME);
        Ok(())
    }

    fn write_data(&mut self, records: &[serde_json::Value]) -> Result<()> {
        let client = self.client.as_ref().ok_or_else(not_initialized)?;
        let runtime = self.runtime.as_ref().ok_or_else(not_initialized)?;

        tracing::info!(
            target: "splunk-pump",
            records = records.len(),
            "writing records"
        );

        self.stats.batches += 1;

        let mut failed = 0usize;
        for raw in records {
            let record = AnalyticsRecord::from_value(raw)?;
            let event = project_record(&record);

            match runtime.block_on(client.send(&event)) {
                Ok(response) if response.status().is_success() => {
                    self.stats.events_sent += 1;
                }
                Ok(response) => {
                    failed += 1;
                    tracing::warn!(
                        target: "splunk-pump",
                        status = %response.status(),
                        api_id = %record.api_id,
                        "collector rejected event"
                    );
                }
                Err(e) => {
                    failed += 1;
                    tracing::warn!(
                        target: "splunk-pump",
                        error = %e,
                        api_id = %record.api_id,
                        "failed to deliver event"
                    );
                }
            }
        }

        self.stats.events_failed += failed;

        // A failed delivery does not abort the batch, but the host still
        // hears about it once every record has been attempted.
        if failed > 0 {
            return Err(Error::Delivery {
                failed,
                attempted: records.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_config() -> serde_json::Value {
        json!({
            "token": "s3cr3t",
            "endpoint": "https://splunk.example.com:8088",
        })
    }

    #[test]
    fn test_name() {
        assert_eq!(SplunkPump::new().name(), "Splunk Pump");
    }

    #[test]
    fn test_init_rejects_malformed_config() {
        let mut pump = SplunkPump::new();
        let result = pump.init(&json!({ "token": 42 }));
        assert!(matches!(result, Err(Error::ConfigDecode(_))));
    }

    #[test]
    fn test_init_rejects_missing_settings() {
        let mut pump = SplunkPump::new();
        let result = pump.init(&json!({ "endpoint": "https://splunk.example.com:8088" }));
        assert!(matches!(result, Err(Error::Settings(_))));
    }

    #[test]
    fn test_init_rejects_bad_endpoint() {
        let mut pump = SplunkPump::new();
        let result = pump.init(&json!({ "token": "s3cr3t", "endpoint": "not a url" }));
        assert!(matches!(result, Err(Error::Endpoint(_))));
    }

    #[test]
    fn test_write_before_init_fails() {
        let mut pump = SplunkPump::new();
        assert!(matches!(
            pump.write_data(&[]),
            Err(Error::Settings(_))
        ));
    }

    #[test]
    fn test_empty_batch_is_a_noop() {
        let mut pump = SplunkPump::new();
        pump.init(&valid_config()).unwrap();

        assert!(pump.write_data(&[]).is_ok());
        assert_eq!(pump.stats().batches, 1);
        assert_eq!(pump.stats().events_sent, 0);
        assert_eq!(pump.stats().events_failed, 0);
    }

    #[test]
    fn test_malformed_record_aborts_batch() {
        let mut pump = SplunkPump::new();
        pump.init(&valid_config()).unwrap();

        let records = [json!({ "api_id": "api-1" })];
        assert!(matches!(
            pump.write_data(&records),
            Err(Error::Record(_))
        ));
    }
}
