//! Tests for the tracing setup.

use std::sync::Mutex;

use pantry_core::tracing::{init_tracing, init_tracing_with_level};

/// Serializes tests that touch `PANTRY_LOG`.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn init_with_filter_from_env() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("PANTRY_LOG", "pantry_parser=debug,pantry_aggregator=info");
    init_tracing();
    std::env::remove_var("PANTRY_LOG");
    tracing::info!(component = "test", "tracing initialized");
}

#[test]
fn init_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing_with_level("debug");
    init_tracing();
}

#[test]
fn garbage_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("PANTRY_LOG", "this_is=not=a=filter");
    init_tracing();
    std::env::remove_var("PANTRY_LOG");
}
