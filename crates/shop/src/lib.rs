//! Corner Market Shop - order session client for the catalog API.
//!
//! # Architecture
//!
//! - The catalog API is the source of truth for products and order records;
//!   this crate performs direct REST calls, no local persistence
//! - [`session::OrderSession`] owns all mutable state for one shopping
//!   session: the catalog, a quantity map, and the cart
//! - Cart lines track their server reconciliation state explicitly: a line
//!   is either added locally or submitted with a server-assigned
//!   order-detail id
//! - Notifications go through the [`notify::Notifier`] trait; presentation
//!   is the caller's concern
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use corner_market_shop::notify::TracingNotifier;
//! use corner_market_shop::{ApiClient, OrderSession, ShopConfig};
//!
//! let config = ShopConfig::from_env()?;
//! let client = ApiClient::new(&config);
//! let mut session = OrderSession::new(client, Arc::new(TracingNotifier));
//!
//! session.load().await;
//! let first = session.products().first().map(|p| p.id).unwrap();
//! session.add_to_cart(first)?;
//! session.submit_order(first, session.quantity(first)).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod config;
pub mod error;
pub mod notify;
pub mod session;

pub use api::ApiClient;
pub use config::ShopConfig;
pub use error::ShopError;
pub use session::OrderSession;
