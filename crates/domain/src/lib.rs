//! Domain layer for order placement.
//!
//! This crate provides:
//! - Customer, product and order entities
//! - Store traits the workflow depends on, with in-memory implementations
//! - `CreateOrderService`, which validates a request against the catalog,
//!   records the order and decrements stock

pub mod error;
pub mod memory;
pub mod order;
pub mod repository;

pub use common::{CustomerId, Money, OrderId, ProductId};
pub use error::RepositoryError;
pub use memory::{InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository};
pub use order::{
    CreateOrderRequest, CreateOrderService, Customer, NewOrder, Order, OrderError, OrderLine,
    Product, ProductLine, StockUpdate,
};
pub use repository::{CustomerRepository, OrderRepository, ProductRepository};
