//! In-memory store implementations for tests and local runs.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use common::{CustomerId, OrderId, ProductId};
use tokio::sync::RwLock;

use crate::error::RepositoryError;
use crate::order::{Customer, NewOrder, Order, Product, ProductLine, StockUpdate};
use crate::repository::{CustomerRepository, OrderRepository, ProductRepository};

/// In-memory customer store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<CustomerId, Customer>>>,
}

impl InMemoryCustomerRepository {
    /// Creates an empty customer store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `customers`.
    pub fn with_customers(customers: impl IntoIterator<Item = Customer>) -> Self {
        let map = customers.into_iter().map(|c| (c.id.clone(), c)).collect();
        Self {
            customers: Arc::new(RwLock::new(map)),
        }
    }

    /// Adds or replaces a customer.
    pub async fn insert(&self, customer: Customer) {
        self.customers
            .write()
            .await
            .insert(customer.id.clone(), customer);
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, RepositoryError> {
        Ok(self.customers.read().await.get(id).cloned())
    }
}

#[derive(Debug, Default)]
struct ProductState {
    products: HashMap<ProductId, Product>,
    lookups: usize,
    updates: usize,
    fail_on_update: bool,
}

/// In-memory product catalog.
///
/// Tracks how many lookups and stock writes it has served and can be told
/// to fail stock writes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    state: Arc<RwLock<ProductState>>,
}

impl InMemoryProductRepository {
    /// Creates a catalog pre-populated with `products`.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let state = ProductState {
            products: products.into_iter().map(|p| (p.id.clone(), p)).collect(),
            ..ProductState::default()
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns the current stock of a product.
    pub async fn quantity_of(&self, id: &ProductId) -> Option<u32> {
        self.state.read().await.products.get(id).map(|p| p.quantity)
    }

    /// Returns the number of `find_all_by_id` calls served.
    pub async fn lookup_count(&self) -> usize {
        self.state.read().await.lookups
    }

    /// Returns the number of `update_quantity` calls served.
    pub async fn update_count(&self) -> usize {
        self.state.read().await.updates
    }

    /// Makes subsequent `update_quantity` calls fail.
    pub async fn set_fail_on_update(&self, fail: bool) {
        self.state.write().await.fail_on_update = fail;
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all_by_id(
        &self,
        products: &[ProductLine],
    ) -> Result<Vec<Product>, RepositoryError> {
        let mut state = self.state.write().await;
        state.lookups += 1;

        let mut seen = HashSet::new();
        let found = products
            .iter()
            .filter(|line| seen.insert(&line.id))
            .filter_map(|line| state.products.get(&line.id).cloned())
            .collect();

        Ok(found)
    }

    async fn update_quantity(&self, updates: Vec<StockUpdate>) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;

        if state.fail_on_update {
            return Err(RepositoryError::Unavailable(
                "product store rejected stock update".to_string(),
            ));
        }

        // The batch is applied whole or not at all.
        if let Some(missing) = updates
            .iter()
            .find(|u| !state.products.contains_key(&u.id))
        {
            return Err(RepositoryError::Conflict(format!(
                "product {} no longer exists",
                missing.id
            )));
        }

        state.updates += 1;
        for update in updates {
            if let Some(product) = state.products.get_mut(&update.id) {
                product.quantity = update.quantity;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
struct OrderState {
    orders: Vec<Order>,
    fail_on_create: bool,
}

/// In-memory order store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    state: Arc<RwLock<OrderState>>,
}

impl InMemoryOrderRepository {
    /// Creates an empty order store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored orders.
    pub async fn order_count(&self) -> usize {
        self.state.read().await.orders.len()
    }

    /// Returns all stored orders in creation order.
    pub async fn orders(&self) -> Vec<Order> {
        self.state.read().await.orders.clone()
    }

    /// Makes subsequent `create` calls fail.
    pub async fn set_fail_on_create(&self, fail: bool) {
        self.state.write().await.fail_on_create = fail;
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order, RepositoryError> {
        let mut state = self.state.write().await;

        if state.fail_on_create {
            return Err(RepositoryError::Unavailable(
                "order store rejected create".to_string(),
            ));
        }

        let order = Order::from_new(order);
        state.orders.push(order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, RepositoryError> {
        Ok(self
            .state
            .read()
            .await
            .orders
            .iter()
            .find(|o| o.id == id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::OrderLine;
    use common::Money;

    fn catalog() -> InMemoryProductRepository {
        InMemoryProductRepository::with_products([
            Product::new("SKU-001", "Widget", Money::from_cents(1000), 10),
            Product::new("SKU-002", "Gadget", Money::from_cents(500), 3),
        ])
    }

    #[tokio::test]
    async fn test_find_all_by_id_collapses_duplicates_and_skips_unknown() {
        let repo = catalog();
        let lines = vec![
            ProductLine::new("SKU-001", 1),
            ProductLine::new("SKU-404", 1),
            ProductLine::new("SKU-001", 4),
        ];

        let found = repo.find_all_by_id(&lines).await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, ProductId::new("SKU-001"));
        assert_eq!(repo.lookup_count().await, 1);
    }

    #[tokio::test]
    async fn test_update_quantity_overwrites_stock() {
        let repo = catalog();
        repo.update_quantity(vec![StockUpdate {
            id: ProductId::new("SKU-002"),
            quantity: 1,
        }])
        .await
        .unwrap();

        assert_eq!(repo.quantity_of(&ProductId::new("SKU-002")).await, Some(1));
        assert_eq!(repo.update_count().await, 1);
    }

    #[tokio::test]
    async fn test_update_quantity_unknown_product_leaves_batch_unapplied() {
        let repo = catalog();
        let result = repo
            .update_quantity(vec![
                StockUpdate {
                    id: ProductId::new("SKU-001"),
                    quantity: 1,
                },
                StockUpdate {
                    id: ProductId::new("SKU-404"),
                    quantity: 1,
                },
            ])
            .await;

        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
        assert_eq!(repo.quantity_of(&ProductId::new("SKU-001")).await, Some(10));
        assert_eq!(repo.update_count().await, 0);
    }

    #[tokio::test]
    async fn test_fail_on_update() {
        let repo = catalog();
        repo.set_fail_on_update(true).await;

        let result = repo.update_quantity(vec![]).await;
        assert!(matches!(result, Err(RepositoryError::Unavailable(_))));
        assert_eq!(repo.update_count().await, 0);
    }

    #[tokio::test]
    async fn test_create_and_find_order() {
        let repo = InMemoryOrderRepository::new();
        let order = repo
            .create(NewOrder {
                customer: Customer::new("cus_1", "Ada", "ada@example.com"),
                products: vec![OrderLine::new("SKU-001", 2, Money::from_cents(1000))],
            })
            .await
            .unwrap();

        assert_eq!(repo.order_count().await, 1);
        let loaded = repo.find_by_id(order.id).await.unwrap();
        assert_eq!(loaded, Some(order));
        assert!(repo.find_by_id(OrderId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_customer_lookup() {
        let repo = InMemoryCustomerRepository::new();
        repo.insert(Customer::new("cus_1", "Ada", "ada@example.com"))
            .await;

        assert!(repo.find_by_id(&CustomerId::new("cus_1")).await.unwrap().is_some());
        assert!(repo.find_by_id(&CustomerId::new("cus_2")).await.unwrap().is_none());
    }
}
