//! Value objects for order placement.

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

/// A product and quantity as requested by the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductLine {
    /// The requested product.
    pub id: ProductId,

    /// Units requested.
    pub quantity: u32,
}

impl ProductLine {
    pub fn new(id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}

/// A line of a placed order.
///
/// Captures the catalog price at the moment the order was created, so later
/// price changes do not affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
    /// Price per unit in cents.
    pub price: Money,
}

impl OrderLine {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32, price: Money) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            price,
        }
    }

    /// Returns the total price for this line (quantity * price).
    pub fn total_price(&self) -> Money {
        self.price.multiply(self.quantity)
    }
}

/// New stock level for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub id: ProductId,
    pub quantity: u32,
}
