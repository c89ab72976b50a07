//! Order requests.

use common::CustomerId;
use serde::{Deserialize, Serialize};

use super::ProductLine;

/// Request to place an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// The customer placing the order.
    pub customer_id: CustomerId,

    /// Requested lines, in the order the customer listed them.
    pub products: Vec<ProductLine>,
}

impl CreateOrderRequest {
    pub fn new(customer_id: impl Into<CustomerId>, products: Vec<ProductLine>) -> Self {
        Self {
            customer_id: customer_id.into(),
            products,
        }
    }
}
