//! Local cart state and its reconciliation with server order records.
//!
//! The cart holds at most one line per product. Each line carries its
//! submission state: a line starts out added locally, and once the server
//! acknowledges an order-detail record for it, the line holds that record's
//! id. Removal needs the id, so the distinction is kept explicit here
//! rather than scribbled onto catalog data.

use corner_market_core::{CurrencyCode, OrderDetailId, Price, ProductId};
use rust_decimal::Decimal;

/// Submission state of a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineState {
    /// In the cart, never submitted to the server.
    Added,
    /// Submitted; carries the server-assigned order-detail id.
    Submitted(OrderDetailId),
}

/// A single cart line.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
    pub state: LineState,
}

impl CartLine {
    /// Price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price.amount * Decimal::from(self.quantity)
    }

    /// Subtotal formatted for display (e.g. "$20.00").
    #[must_use]
    pub fn subtotal_display(&self) -> String {
        Price::new(self.subtotal(), self.price.currency_code).display()
    }

    /// The server-assigned order-detail id, if this line was submitted.
    #[must_use]
    pub const fn order_detail_id(&self) -> Option<OrderDetailId> {
        match self.state {
            LineState::Submitted(id) => Some(id),
            LineState::Added => None,
        }
    }
}

/// The cart: an ordered list of lines, at most one per product.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// All lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up the line for a product.
    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }

    /// Set a product's quantity, appending a new line on first add.
    ///
    /// An existing line keeps its submission state; only the quantity
    /// changes. A new line starts as [`LineState::Added`].
    pub fn upsert(&mut self, product_id: ProductId, name: &str, price: Price, quantity: u32) {
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
        } else {
            self.lines.push(CartLine {
                product_id,
                name: name.to_string(),
                price,
                quantity,
                state: LineState::Added,
            });
        }
    }

    /// Record a server-acknowledged submission for a line.
    ///
    /// Overwrites any previously recorded id: submitting the same product
    /// twice creates two server records and only the second is remembered.
    /// Returns false if the product has no line.
    pub fn record_submission(&mut self, product_id: ProductId, detail_id: OrderDetailId) -> bool {
        match self.line_mut(product_id) {
            Some(line) => {
                line.state = LineState::Submitted(detail_id);
                true
            }
            None => false,
        }
    }

    /// Drop a product's line, returning it if present.
    pub fn remove(&mut self, product_id: ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.product_id == product_id)?;
        Some(self.lines.remove(index))
    }

    /// Grand total, recomputed from the lines on every call.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Grand total formatted for display (e.g. "$20.00").
    #[must_use]
    pub fn total_display(&self) -> String {
        let currency = self
            .lines
            .first()
            .map_or_else(CurrencyCode::default, |l| l.price.currency_code);
        Price::new(self.total(), currency).display()
    }
}
