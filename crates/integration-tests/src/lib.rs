//! Integration tests for Corner Market.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the catalog API server, then:
//! MARKET_API_ORIGIN=http://127.0.0.1:8000 \
//!     cargo test -p corner-market-integration-tests -- --ignored
//! ```
//!
//! The tests exercise the real order flow (catalog, order, order details)
//! against whatever data the server holds; they create their own orders and
//! clean up the order-detail records they submit.

/// Base origin for the catalog API (configurable via environment).
#[must_use]
pub fn api_origin() -> String {
    std::env::var("MARKET_API_ORIGIN").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string())
}
