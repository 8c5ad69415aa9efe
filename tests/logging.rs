//! Logging initialization test
//!
//! Installing the global subscriber is once per process, so this lives in
//! its own test binary.

use tempfile::TempDir;

use engine_compat::logging::{LogFormat, LoggingError, init_logging};

#[test]
fn init_logging_writes_json_lines_to_file_and_only_once() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("logs").join("engine-compat.log");

    let guard = init_logging(LogFormat::Json, Some(&log_file)).unwrap();
    tracing::info!(engine_version = "3.5.0", "Requirements satisfied");
    let second = init_logging(LogFormat::Text, None);
    drop(guard);

    assert!(matches!(second, Err(LoggingError::AlreadyInitialized(_))));

    let content = std::fs::read_to_string(&log_file).unwrap();
    let line: serde_json::Value = serde_json::from_str(content.lines().next().unwrap()).unwrap();
    assert_eq!(line["level"], "INFO");
    assert_eq!(line["fields"]["message"], "Requirements satisfied");
    assert_eq!(line["fields"]["engine_version"], "3.5.0");
}
