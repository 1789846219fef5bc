//! Corner Market Core - Shared types library.
//!
//! This crate provides common types used across all Corner Market components:
//! - `shop` - Order session client for the catalog API
//! - `cli` - Terminal front end driving an order session
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
