//! Test utilities and shared test helpers for nowbot.
//!
//! Fixtures and helpers used by the unit and integration tests of every
//! crate in the workspace. Enabled with the `testing` feature.

use chrono::{DateTime, TimeZone, Utc};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Test fixture for creating a fixed UTC instant.
pub fn mock_timestamp(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: u32,
) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` to a fresh temporary file and return its handle.
#[cfg(feature = "tempfile")]
pub fn write_temp_file(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temporary file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary file");
    file
}

/// Label sets used by the ranking tests.
pub mod label_fixtures {
    /// The four-city catalog used in the prefix ordering scenario.
    pub fn four_cities() -> Vec<&'static str> {
        vec!["New York", "Los Angeles", "London", "Paris"]
    }

    /// Thirty distinct labels, deliberately not in sorted order.
    pub fn thirty_labels() -> Vec<String> {
        (0..30)
            .rev()
            .map(|i| format!("City {:02}", (i * 7) % 30))
            .collect()
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// Create a minimal valid test configuration as YAML string.
    pub fn minimal_config_yaml() -> &'static str {
        r#"
discord:
  token: "test_token"
"#
    }

    /// Create a full test configuration as YAML string.
    pub fn full_config_yaml() -> &'static str {
        concat!(
            "discord:\n",
            "  token: \"test_token_full\"\n",
            "  token_file: \"secrets/token.txt\"\n",
            "\n",
            "time:\n",
            "  default_timezone: \"America/New_York\"\n",
            "  short_format: \"%H:%M\"\n",
            "  long_format: \"%Y-%m-%d %H:%M:%S %Z\"\n",
            "\n",
            "language: \"fi-FI\"\n",
            "\n",
            "logging:\n",
            "  level: \"nowbot=debug\"\n",
            "  format: \"json\"\n",
            "  include_spans: true\n"
        )
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// Strategy for label-like strings (letters, spaces, a few accents).
    pub fn label_strategy() -> impl Strategy<Value = String> {
        r"[A-Za-zÅÄÖåäö ]{1,20}".prop_map(|s| s.to_string())
    }

    /// Strategy for arbitrary autocomplete queries, including empty ones.
    pub fn query_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            r"[A-Za-z ]{1,8}".prop_map(|s| s.to_string()),
            any::<String>().prop_map(|s| s.chars().take(12).collect()),
        ]
    }

    /// Strategy for a catalog-sized set of distinct labels.
    pub fn label_set_strategy() -> impl Strategy<Value = Vec<String>> {
        proptest::collection::btree_set(label_strategy(), 0..60)
            .prop_map(|set| set.into_iter().collect())
    }
}
