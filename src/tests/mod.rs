//! Test suite for the bridge configuration validator
//! 
//! This module provides:
//! - Configuration fixtures and mutation helpers
//! - Integration tests running both validation passes end to end

pub mod fixtures;
pub mod integration;

/// Test configuration and utilities
pub mod config {
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            // Initialize tracing for tests
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }
}
