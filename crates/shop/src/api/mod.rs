//! Catalog API client.
//!
//! REST client for the shop's catalog server. Products and order records
//! live server-side; this client is a thin, uncached mapping of the four
//! endpoints the order session needs:
//!
//! - `GET /api/products/` - list the catalog
//! - `POST /api/orders/` - open an order
//! - `POST /api/order_details/` - submit one cart line
//! - `DELETE /api/order_details/{id}/` - retract a submitted line

pub mod types;

use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

use corner_market_core::OrderDetailId;

use crate::config::ShopConfig;
use types::{NewOrder, NewOrderDetail, Order, OrderDetail, Product};

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The server answered with an unexpected status code.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// Status code the server returned.
        status: StatusCode,
        /// Response body, truncated for logging.
        body: String,
    },
}

/// Client for the catalog API.
///
/// Cheaply cloneable; all clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    origin: String,
}

impl ApiClient {
    /// Create a new catalog API client.
    #[must_use]
    pub fn new(config: &ShopConfig) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                origin: config.api_origin.clone(),
            }),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.inner.origin)
    }

    /// Read a success response body as JSON.
    ///
    /// Reads the body as text first so failures can be logged with the
    /// offending payload.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %truncate(&body),
                "catalog API returned non-success status"
            );
            return Err(ApiError::Status {
                status,
                body: truncate(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %truncate(&body),
                "failed to parse catalog API response"
            );
            ApiError::Parse(e)
        })
    }

    /// Fetch the product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self
            .inner
            .client
            .get(self.endpoint("/api/products/"))
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Open a new order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// parsed.
    #[instrument(skip(self, order))]
    pub async fn create_order(&self, order: &NewOrder) -> Result<Order, ApiError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("/api/orders/"))
            .json(order)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Submit one cart line as an order-detail record.
    ///
    /// The server acknowledges creation with status 201; anything else is an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not 201, or the
    /// response cannot be parsed.
    #[instrument(skip(self, detail))]
    pub async fn create_order_detail(
        &self,
        detail: &NewOrderDetail,
    ) -> Result<OrderDetail, ApiError> {
        let response = self
            .inner
            .client
            .post(self.endpoint("/api/order_details/"))
            .json(detail)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await?;
            tracing::error!(
                status = %status,
                body = %truncate(&body),
                "order detail creation was not acknowledged"
            );
            return Err(ApiError::Status {
                status,
                body: truncate(&body),
            });
        }

        Self::decode(response).await
    }

    /// Delete a submitted order-detail record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers with a
    /// non-success status.
    #[instrument(skip(self))]
    pub async fn delete_order_detail(&self, id: OrderDetailId) -> Result<(), ApiError> {
        let response = self
            .inner
            .client
            .delete(self.endpoint(&format!("/api/order_details/{id}/")))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!(
                status = %status,
                body = %truncate(&body),
                "order detail deletion failed"
            );
            return Err(ApiError::Status {
                status,
                body: truncate(&body),
            });
        }

        Ok(())
    }
}

fn truncate(body: &str) -> String {
    body.chars().take(500).collect()
}
