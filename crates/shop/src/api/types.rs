//! Wire types for the catalog API.
//!
//! Monetary amounts travel as decimal strings, matching the server's
//! decimal-field serialization.

use corner_market_core::{OrderDetailId, OrderId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product. Read-only within this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: Decimal,
}

/// An order record, one per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub total_cost: Decimal,
}

/// Request body for opening an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub total_cost: Decimal,
}

/// Request body for creating an order-detail record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderDetail {
    pub product_id: ProductId,
    pub order_id: OrderId,
    pub quantity: u32,
}

/// A server-side order-detail record.
///
/// Only the id is used locally; it links a cart line to the record that a
/// later removal must delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: OrderDetailId,
    pub product_id: ProductId,
    pub order_id: OrderId,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_list_deserializes() {
        let json = r#"[
            {"id": 1, "name": "Widget", "brand": "Acme", "price": "10.00"},
            {"id": 2, "name": "Gadget", "brand": "Globex", "price": "24.50"}
        ]"#;

        let products: Vec<Product> = serde_json::from_str(json).expect("valid product list");
        assert_eq!(products.len(), 2);

        let first = products.first().expect("first product");
        assert_eq!(first.id, ProductId::new(1));
        assert_eq!(first.name, "Widget");
        assert_eq!(first.brand, "Acme");
        assert_eq!(first.price, Decimal::new(1000, 2));
    }

    #[test]
    fn test_product_price_accepts_bare_numbers() {
        // Some serializers emit decimal fields as numbers rather than strings.
        let json = r#"{"id": 1, "name": "Widget", "brand": "Acme", "price": 10}"#;
        let product: Product = serde_json::from_str(json).expect("valid product");
        assert_eq!(product.price, Decimal::from(10));
    }

    #[test]
    fn test_order_detail_request_shape() {
        let detail = NewOrderDetail {
            product_id: ProductId::new(1),
            order_id: OrderId::new(5),
            quantity: 2,
        };

        let json = serde_json::to_value(&detail).expect("serializable");
        assert_eq!(json["product_id"], 1);
        assert_eq!(json["order_id"], 5);
        assert_eq!(json["quantity"], 2);
    }

    #[test]
    fn test_order_detail_response_deserializes() {
        let json = r#"{"id": 99, "product_id": 1, "order_id": 5, "quantity": 2}"#;
        let detail: OrderDetail = serde_json::from_str(json).expect("valid order detail");
        assert_eq!(detail.id, OrderDetailId::new(99));
        assert_eq!(detail.quantity, 2);
    }
}
