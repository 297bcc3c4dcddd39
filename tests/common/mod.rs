//! Shared test utilities for integration tests

#![allow(dead_code)]

use mbql_filter::{parser, FilterClause, FormatSettings, Metadata};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

pub const ORDERS: i64 = 1;
pub const PRODUCTS: i64 = 2;
pub const REVIEWS: i64 = 4;

/// Load a test fixture from the tests/test_data directory
pub fn load_fixture(name: &str) -> Metadata {
    let path = format!("tests/test_data/{}", name);
    parser::parse_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

pub fn load_settings(name: &str) -> FormatSettings {
    let path = format!("tests/test_data/{}", name);
    FormatSettings::from_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load settings {}: {}", name, e))
}

/// Route `tracing` output through the test harness. Set `RUST_LOG=mbql_filter=debug` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parse a clause from MBQL, panicking on malformed input
pub fn clause(value: Value) -> FilterClause {
    FilterClause::from_mbql(&value)
        .unwrap_or_else(|e| panic!("Failed to parse clause {}: {}", value, e))
}
