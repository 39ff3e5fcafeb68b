//! Shared fixtures and log capture for the integration tests.
//!
//! `init_test_logging` routes two streams into the test writer: the
//! `tracing` events the tests emit themselves (rendered tables, logged
//! assertions) and the library's `log` records (grid summaries, skipped
//! rows, encoding substitutions and byte counts), which
//! `tracing-subscriber` bridges from the `log` facade.
//!
//! By default the library logs at debug level and the tests at info. Set
//! `RUST_LOG=table_printer::grid=trace` to also see every row dropped by
//! the row window, or `TEST_LOG_JSON=1` for one JSON object per record.
//!
//! The reference table (`HEADERS`, `reference_rows`) has an absent value
//! in two rows and one name longer than the other cells of its column.

#![allow(dead_code)]

pub mod assertions;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Library records at debug, everything else at info.
const DEFAULT_FILTER: &str = "info,table_printer=debug";

/// Install the test subscriber once per test binary.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let json = std::env::var_os("TEST_LOG_JSON").is_some();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let json_layer = json.then(|| fmt::layer().json().with_test_writer());
        let text_layer = (!json).then(|| {
            fmt::layer()
                .with_test_writer()
                .with_target(true)
                .compact()
        });

        // Another harness may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(json_layer)
            .with(text_layer)
            .try_init();
    });
}

/// Headers of the reference table.
pub const HEADERS: [&str; 3] = ["id", "name", "age"];

/// Rows of the reference table; `None` is an absent value.
pub fn reference_rows() -> Vec<Vec<Option<&'static str>>> {
    vec![
        vec![Some("1"), Some("john"), None],
        vec![Some("2"), Some("tom"), Some("20")],
        vec![Some("3"), Some("verylongname"), None],
        vec![Some("4"), Some("mary"), Some("30")],
    ]
}
