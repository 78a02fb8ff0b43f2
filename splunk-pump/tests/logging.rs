//! Logging initialization test
//!
//! Lives in its own test binary: [`splunk_pump::logging::init`] installs
//! the process-global subscriber, which can only happen once.

use splunk_pump::logging::{self, LoggingConfig};
use tempfile::TempDir;

#[test]
fn init_writes_to_state_dir() {
    let tmp = TempDir::new().expect("temp dir");
    std::env::set_var("XDG_STATE_HOME", tmp.path());

    let guard = logging::init(&LoggingConfig::default()).expect("init logging");
    tracing::info!("pump logging smoke line");
    drop(guard);

    let log_dir = tmp.path().join("splunk-pump");
    let log_file = std::fs::read_dir(&log_dir)
        .expect("log dir exists")
        .filter_map(|e| e.ok())
        .find(|e| {
            e.file_name()
                .to_string_lossy()
                .starts_with("splunk-pump.log")
        })
        .expect("log file created");

    let contents = std::fs::read_to_string(log_file.path()).expect("read log file");
    assert!(contents.contains("pump logging smoke line"));
}
