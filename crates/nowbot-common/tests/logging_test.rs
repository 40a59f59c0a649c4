//! Global subscriber installation, kept in its own test binary because a
//! process can install only one subscriber.

use nowbot_common::{init_logging, LogFormat, LoggingConfig};

#[test]
fn test_init_logging_writes_to_file() {
    std::env::remove_var("RUST_LOG");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nowbot.log");
    let config = LoggingConfig {
        level: "info".to_string(),
        format: LogFormat::Json,
        file_path: Some(path.clone()),
        ..LoggingConfig::default()
    };

    init_logging(&config).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Logging initialized"));
    assert!(contents.contains("\"format\":\"json\""));

    // a second subscriber cannot be installed
    assert!(init_logging(&config).is_err());
}
