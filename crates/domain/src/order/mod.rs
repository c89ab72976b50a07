//! Order placement: entities, request types and the create-order workflow.

mod commands;
mod entities;
mod service;
mod value_objects;

pub use commands::CreateOrderRequest;
pub use entities::{Customer, NewOrder, Order, Product};
pub use service::CreateOrderService;
pub use value_objects::{OrderLine, ProductLine, StockUpdate};

use common::ProductId;
use thiserror::Error;

use crate::error::RepositoryError;

/// Errors that can occur while placing an order.
///
/// The display string of each variant is the message surfaced to whoever
/// submitted the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// No customer matches the requested id.
    #[error("Customer does not exist")]
    CustomerNotFound,

    /// None of the requested products exist.
    #[error("Products do not exist")]
    NoProductsFound,

    /// A requested product is missing from the catalog.
    #[error("Could not find product {0}")]
    ProductNotFound(ProductId),

    /// A line asks for more units than are in stock.
    #[error("The quantity {quantity} is not available for {product_id}")]
    InsufficientStock {
        product_id: ProductId,
        quantity: u32,
    },

    /// A store call failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl OrderError {
    /// Human-readable message for the caller.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Short label used for the rejection metric.
    pub fn reason(&self) -> &'static str {
        match self {
            OrderError::CustomerNotFound => "customer_not_found",
            OrderError::NoProductsFound => "no_products_found",
            OrderError::ProductNotFound(_) => "product_not_found",
            OrderError::InsufficientStock { .. } => "insufficient_stock",
            OrderError::Repository(_) => "repository",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_product() {
        let err = OrderError::ProductNotFound(ProductId::new("SKU-404"));
        assert_eq!(err.message(), "Could not find product SKU-404");

        let err = OrderError::InsufficientStock {
            product_id: ProductId::new("SKU-001"),
            quantity: 6,
        };
        assert_eq!(err.message(), "The quantity 6 is not available for SKU-001");
    }

    #[test]
    fn test_repository_error_converts() {
        let err: OrderError = RepositoryError::Unavailable("down".to_string()).into();
        assert_eq!(err.reason(), "repository");
        assert_eq!(err.message(), "Repository error: Store unavailable: down");
    }
}
