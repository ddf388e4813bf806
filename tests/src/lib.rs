//! # TapVault Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/       # Cross-crate verification flows
//!     ├── flows.rs       # End-to-end accept/replay/rejection scenarios
//!     └── concurrency.rs # Thread-level ledger atomicity
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p tapvault-tests
//!
//! # By category
//! cargo test -p tapvault-tests integration::flows
//! cargo test -p tapvault-tests integration::concurrency
//! ```

#![allow(dead_code)]

pub mod integration;

/// Install a test-friendly tracing subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
