//! Store traits the order workflow depends on.

use async_trait::async_trait;
use common::{CustomerId, OrderId};

use crate::error::RepositoryError;
use crate::order::{Customer, NewOrder, Order, Product, ProductLine, StockUpdate};

/// Read access to customers.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Finds a customer by id.
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, RepositoryError>;
}

/// Catalog lookups and stock writes.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns the products whose ids appear in `products`.
    ///
    /// Matching is by id only; the requested quantities are ignored and each
    /// existing product is returned at most once.
    async fn find_all_by_id(
        &self,
        products: &[ProductLine],
    ) -> Result<Vec<Product>, RepositoryError>;

    /// Overwrites the stock level of each listed product.
    async fn update_quantity(&self, updates: Vec<StockUpdate>) -> Result<(), RepositoryError>;
}

/// Order persistence.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists a new order and returns it with its assigned id.
    async fn create(&self, order: NewOrder) -> Result<Order, RepositoryError>;

    /// Loads an order by id.
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError>;
}
