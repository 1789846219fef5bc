//! Unified error handling for the shop crate.
//!
//! Session operations return `Result<T, ShopError>`. The session itself
//! decides which failures surface to the user and which are only logged;
//! see the propagation rules on [`crate::session::OrderSession`].

use thiserror::Error;

use corner_market_core::ProductId;

use crate::api::ApiError;

/// Application-level error type for the order session.
#[derive(Debug, Error)]
pub enum ShopError {
    /// Catalog API operation failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A product id did not resolve to a catalog product.
    #[error("unknown product: {0}")]
    ProductNotFound(ProductId),

    /// The session has no open order, so nothing can be submitted.
    #[error("no open order for this session")]
    NoOpenOrder,

    /// The cart is not in a state that allows the operation.
    #[error("invalid cart state: {0}")]
    InvalidState(&'static str),
}

/// Result type alias for `ShopError`.
pub type Result<T> = std::result::Result<T, ShopError>;
