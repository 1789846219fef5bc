//! The order session: one page-load's worth of shopping state.
//!
//! An [`OrderSession`] owns the catalog, a per-product quantity map, and
//! the cart, and reconciles cart lines with server-side order-detail
//! records. All operations take `&mut self`, so two operations on the same
//! product can never overlap.
//!
//! Failure propagation follows three rules:
//!
//! - catalog loading failures are logged and leave an empty, non-loading
//!   session (the user sees an empty shop, not an error),
//! - submit failures surface through the notifier and leave local state
//!   unchanged,
//! - the delete issued during removal is logged but never branched on;
//!   the local line is cleared regardless of the server outcome.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::instrument;

use corner_market_core::{CurrencyCode, OrderId, Price, ProductId};

use crate::api::ApiClient;
use crate::api::types::{NewOrder, NewOrderDetail, Product};
use crate::cart::{Cart, LineState};
use crate::error::ShopError;
use crate::notify::Notifier;

/// Controller for one shopping session.
pub struct OrderSession {
    api: ApiClient,
    notifier: Arc<dyn Notifier>,
    products: Vec<Product>,
    quantities: HashMap<ProductId, u32>,
    cart: Cart,
    order_id: Option<OrderId>,
    loading: bool,
}

impl OrderSession {
    /// Create a session. It reports as loading until [`load`](Self::load)
    /// completes.
    #[must_use]
    pub fn new(api: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            products: Vec::new(),
            quantities: HashMap::new(),
            cart: Cart::default(),
            order_id: None,
            loading: true,
        }
    }

    /// Fetch the catalog, then open a new order with zero total cost.
    ///
    /// Two sequential calls; the second depends on the first only by
    /// ordering, not by data.
    ///
    /// # Errors
    ///
    /// Returns an error if either call fails.
    pub async fn load_catalog(&self) -> Result<(Vec<Product>, OrderId), ShopError> {
        let products = self.api.list_products().await?;
        let order = self
            .api
            .create_order(&NewOrder {
                total_cost: Decimal::ZERO,
            })
            .await?;
        Ok((products, order.id))
    }

    /// Start the session.
    ///
    /// On success the catalog and order id are stored. On failure the error
    /// is logged and the session is left with an empty catalog; either way
    /// the session stops reporting as loading.
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        match self.load_catalog().await {
            Ok((products, order_id)) => {
                tracing::debug!(
                    products = products.len(),
                    order_id = %order_id,
                    "catalog loaded"
                );
                self.products = products;
                self.order_id = Some(order_id);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load catalog");
            }
        }
        self.loading = false;
    }

    /// Add one unit of a product to the cart.
    ///
    /// Increments the product's quantity (starting at 1) and upserts its
    /// cart line. Purely local; nothing is sent to the server.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::ProductNotFound`] if the id does not resolve to
    /// a catalog product.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<(), ShopError> {
        let product = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or(ShopError::ProductNotFound(product_id))?;
        let name = product.name.clone();
        let price = Price::new(product.price, CurrencyCode::USD);

        let quantity = self.quantities.get(&product_id).copied().unwrap_or(0) + 1;
        self.quantities.insert(product_id, quantity);
        self.cart.upsert(product_id, &name, price, quantity);

        self.notifier
            .success(&format!("Added {name} to cart"), &format!("Quantity: {quantity}"));
        Ok(())
    }

    /// Submit a product's cart line as an order-detail record.
    ///
    /// On acknowledgement the server-assigned id is recorded on the line.
    /// Not idempotent: submitting the same product twice creates two server
    /// records, and the second id replaces the first.
    ///
    /// # Errors
    ///
    /// Returns an error if the session has no open order, the product has
    /// no cart line, or the request fails. On failure local state is left
    /// unchanged and the notifier carries a user-visible error.
    #[instrument(skip(self))]
    pub async fn submit_order(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), ShopError> {
        let order_id = self.order_id.ok_or(ShopError::NoOpenOrder)?;
        if self.cart.line(product_id).is_none() {
            return Err(ShopError::InvalidState("product is not in the cart"));
        }
        let name = self.product_name(product_id)?;

        match self
            .api
            .create_order_detail(&NewOrderDetail {
                product_id,
                order_id,
                quantity,
            })
            .await
        {
            Ok(detail) => {
                self.cart.record_submission(product_id, detail.id);
                self.notifier.success(
                    &format!("Order submitted for {name}"),
                    &format!("Quantity: {quantity}"),
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to create order detail");
                self.notifier.error("Failed to submit order");
                Err(e.into())
            }
        }
    }

    /// Remove a product from the cart, retracting its server record.
    ///
    /// Only submitted lines can be removed; the stored order-detail id is
    /// what the delete targets. The delete outcome is logged but not
    /// branched on: the quantity entry and the line are cleared regardless.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::InvalidState`] if the product has no cart line
    /// or its line was never submitted.
    #[instrument(skip(self))]
    pub async fn remove_from_cart(&mut self, product_id: ProductId) -> Result<(), ShopError> {
        let line = self
            .cart
            .line(product_id)
            .ok_or(ShopError::InvalidState("product is not in the cart"))?;
        let LineState::Submitted(detail_id) = line.state else {
            return Err(ShopError::InvalidState("line has not been submitted"));
        };
        let name = line.name.clone();

        if let Err(e) = self.api.delete_order_detail(detail_id).await {
            tracing::warn!(
                error = %e,
                detail_id = %detail_id,
                "failed to delete order detail; clearing the local line anyway"
            );
        }

        self.quantities.remove(&product_id);
        self.cart.remove(product_id);
        self.notifier.info(&format!("Removed {name} from cart"));
        Ok(())
    }

    /// Grand total over the cart, recomputed fresh on every call.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.cart.total()
    }

    /// Grand total formatted for display (e.g. "$20.00").
    #[must_use]
    pub fn total_display(&self) -> String {
        self.cart.total_display()
    }

    /// The loaded catalog; empty until loading finishes, or after a failed
    /// load.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Requested quantity for a product; 0 when absent from the cart.
    #[must_use]
    pub fn quantity(&self, product_id: ProductId) -> u32 {
        self.quantities.get(&product_id).copied().unwrap_or(0)
    }

    /// True until the first [`load`](Self::load) finishes.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The session's order id, once the catalog has loaded.
    #[must_use]
    pub const fn order_id(&self) -> Option<OrderId> {
        self.order_id
    }

    fn product_name(&self, product_id: ProductId) -> Result<String, ShopError> {
        self.products
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| p.name.clone())
            .ok_or(ShopError::ProductNotFound(product_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShopConfig;
    use crate::notify::test_support::MemoryNotifier;
    use corner_market_core::OrderDetailId;

    /// A session pointed at an unroutable origin: any network call fails.
    fn offline_session() -> (OrderSession, Arc<MemoryNotifier>) {
        let config = ShopConfig::with_origin("http://127.0.0.1:1").expect("valid origin");
        let notifier = Arc::new(MemoryNotifier::default());
        let session = OrderSession::new(ApiClient::new(&config), notifier.clone());
        (session, notifier)
    }

    fn widget() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Widget".to_string(),
            brand: "Acme".to_string(),
            price: Decimal::from(10),
        }
    }

    fn gadget() -> Product {
        Product {
            id: ProductId::new(2),
            name: "Gadget".to_string(),
            brand: "Globex".to_string(),
            price: Decimal::new(2450, 2),
        }
    }

    #[test]
    fn test_add_to_cart_twice_accumulates_quantity() {
        let (mut session, notifier) = offline_session();
        session.products = vec![widget()];

        session.add_to_cart(ProductId::new(1)).expect("first add");
        session.add_to_cart(ProductId::new(1)).expect("second add");

        assert_eq!(session.cart().lines().len(), 1);
        let line = session.cart().line(ProductId::new(1)).expect("widget line");
        assert_eq!(line.quantity, 2);
        assert_eq!(session.quantity(ProductId::new(1)), 2);
        assert_eq!(session.total_price(), Decimal::from(20));
        assert_eq!(session.total_display(), "$20.00");

        let events = notifier.events();
        assert_eq!(
            events,
            vec![
                "success: Added Widget to cart (Quantity: 1)",
                "success: Added Widget to cart (Quantity: 2)",
            ]
        );
    }

    #[test]
    fn test_add_to_cart_rejects_stale_id() {
        let (mut session, notifier) = offline_session();
        session.products = vec![widget()];

        let result = session.add_to_cart(ProductId::new(42));
        assert!(matches!(result, Err(ShopError::ProductNotFound(_))));
        assert!(session.cart().is_empty());
        assert!(notifier.events().is_empty());
    }

    #[test]
    fn test_quantity_map_and_cart_stay_consistent() {
        let (mut session, _notifier) = offline_session();
        session.products = vec![widget(), gadget()];

        for _ in 0..3 {
            session.add_to_cart(ProductId::new(1)).expect("add widget");
        }
        session.add_to_cart(ProductId::new(2)).expect("add gadget");

        for line in session.cart().lines() {
            assert_eq!(line.quantity, session.quantity(line.product_id));
        }
    }

    #[tokio::test]
    async fn test_failed_load_leaves_empty_non_loading_session() {
        let (mut session, _notifier) = offline_session();
        assert!(session.is_loading());

        session.load().await;

        assert!(!session.is_loading());
        assert!(session.products().is_empty());
        assert!(session.order_id().is_none());
    }

    #[tokio::test]
    async fn test_submit_requires_open_order() {
        let (mut session, _notifier) = offline_session();
        session.products = vec![widget()];
        session.add_to_cart(ProductId::new(1)).expect("add widget");

        let result = session.submit_order(ProductId::new(1), 1).await;
        assert!(matches!(result, Err(ShopError::NoOpenOrder)));
    }

    #[tokio::test]
    async fn test_submit_requires_cart_line() {
        let (mut session, _notifier) = offline_session();
        session.products = vec![widget()];
        session.order_id = Some(OrderId::new(5));

        let result = session.submit_order(ProductId::new(1), 1).await;
        assert!(matches!(result, Err(ShopError::InvalidState(_))));
    }

    #[tokio::test]
    async fn test_submit_failure_leaves_state_unchanged() {
        let (mut session, notifier) = offline_session();
        session.products = vec![widget()];
        session.order_id = Some(OrderId::new(5));
        session.add_to_cart(ProductId::new(1)).expect("add widget");

        let result = session.submit_order(ProductId::new(1), 1).await;
        assert!(matches!(result, Err(ShopError::Api(_))));

        let line = session.cart().line(ProductId::new(1)).expect("widget line");
        assert_eq!(line.state, LineState::Added);
        assert_eq!(session.quantity(ProductId::new(1)), 1);
        assert!(notifier.events().contains(&"error: Failed to submit order".to_string()));
    }

    #[tokio::test]
    async fn test_remove_rejects_unsubmitted_line() {
        let (mut session, notifier) = offline_session();
        session.products = vec![widget()];
        session.add_to_cart(ProductId::new(1)).expect("add widget");

        let result = session.remove_from_cart(ProductId::new(1)).await;
        assert!(matches!(
            result,
            Err(ShopError::InvalidState("line has not been submitted"))
        ));
        assert_eq!(session.cart().lines().len(), 1);
        assert_eq!(session.quantity(ProductId::new(1)), 1);
        assert!(!notifier.events().contains(&"info: Removed Widget from cart".to_string()));
    }

    #[tokio::test]
    async fn test_remove_rejects_absent_product() {
        let (mut session, _notifier) = offline_session();
        session.products = vec![widget()];

        let result = session.remove_from_cart(ProductId::new(1)).await;
        assert!(matches!(
            result,
            Err(ShopError::InvalidState("product is not in the cart"))
        ));
    }

    #[tokio::test]
    async fn test_remove_clears_local_state_even_when_delete_fails() {
        let (mut session, notifier) = offline_session();
        session.products = vec![widget(), gadget()];
        session.add_to_cart(ProductId::new(1)).expect("add widget");
        session.add_to_cart(ProductId::new(2)).expect("add gadget");
        session
            .cart
            .record_submission(ProductId::new(1), OrderDetailId::new(99));

        // The delete cannot reach a server, but removal proceeds regardless.
        session
            .remove_from_cart(ProductId::new(1))
            .await
            .expect("removal succeeds");

        assert!(session.cart().line(ProductId::new(1)).is_none());
        assert_eq!(session.quantity(ProductId::new(1)), 0);
        assert_eq!(session.quantity(ProductId::new(2)), 1);
        assert_eq!(session.total_price(), Decimal::new(2450, 2));
        assert!(notifier.events().contains(&"info: Removed Widget from cart".to_string()));
    }

    #[test]
    fn test_submission_state_records_server_id() {
        let (mut session, _notifier) = offline_session();
        session.products = vec![widget()];
        session.add_to_cart(ProductId::new(1)).expect("add widget");

        session
            .cart
            .record_submission(ProductId::new(1), OrderDetailId::new(99));

        let line = session.cart().line(ProductId::new(1)).expect("widget line");
        assert_eq!(line.order_detail_id(), Some(OrderDetailId::new(99)));
    }

    #[test]
    fn test_total_on_empty_cart() {
        let (session, _notifier) = offline_session();
        assert_eq!(session.total_price(), Decimal::ZERO);
        assert_eq!(session.total_display(), "$0.00");
    }
}
