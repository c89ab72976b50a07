//! Records owned by the customer, product and order stores.

use chrono::{DateTime, Utc};
use common::{CustomerId, Money, OrderId, ProductId};
use serde::{Deserialize, Serialize};

use super::OrderLine;

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(
        id: impl Into<CustomerId>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A catalog product with its current stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price per unit in cents.
    pub price: Money,
    /// Units in stock.
    pub quantity: u32,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }
}

/// Payload handed to the order store to create an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer: Customer,
    pub products: Vec<OrderLine>,
}

/// A placed order.
///
/// Orders are written once by the store and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer: Customer,
    pub products: Vec<OrderLine>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Builds an order from a creation payload, stamping a fresh id and time.
    pub fn from_new(new_order: NewOrder) -> Self {
        Self {
            id: OrderId::new(),
            customer: new_order.customer,
            products: new_order.products,
            created_at: Utc::now(),
        }
    }

    /// Returns the total order amount.
    pub fn total_amount(&self) -> Money {
        self.products.iter().map(OrderLine::total_price).sum()
    }
}
