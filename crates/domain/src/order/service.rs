//! Create-order workflow.

use std::collections::HashMap;

use common::ProductId;

use crate::repository::{CustomerRepository, OrderRepository, ProductRepository};

use super::{
    CreateOrderRequest, NewOrder, Order, OrderError, OrderLine, Product, ProductLine, StockUpdate,
};

/// Places orders against the product catalog.
///
/// Validates the customer, the requested products and their stock, records
/// the order with catalog prices, then writes the decremented stock levels
/// back in a single batch. Stock is not restored if that final write fails;
/// the order stays recorded.
pub struct CreateOrderService<O, P, C>
where
    O: OrderRepository,
    P: ProductRepository,
    C: CustomerRepository,
{
    orders: O,
    products: P,
    customers: C,
}

impl<O, P, C> CreateOrderService<O, P, C>
where
    O: OrderRepository,
    P: ProductRepository,
    C: CustomerRepository,
{
    /// Creates a new service over the given stores.
    pub fn new(orders: O, products: P, customers: C) -> Self {
        Self {
            orders,
            products,
            customers,
        }
    }

    /// Places an order.
    ///
    /// Fails on the first violated rule, checked in this order: unknown
    /// customer, no known products, an unknown product, insufficient stock.
    /// "First" follows the order of lines in the request.
    #[tracing::instrument(
        skip(self, request),
        fields(customer_id = %request.customer_id, lines = request.products.len())
    )]
    pub async fn execute(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        let started = std::time::Instant::now();

        let result = self.place(request).await;

        metrics::histogram!("order_creation_duration_seconds")
            .record(started.elapsed().as_secs_f64());
        match &result {
            Ok(order) => {
                metrics::counter!("orders_created_total").increment(1);
                tracing::info!(order_id = %order.id, total = %order.total_amount(), "order created");
            }
            Err(e) => {
                metrics::counter!("order_rejections_total", "reason" => e.reason()).increment(1);
                tracing::warn!(reason = e.reason(), error = %e, "order rejected");
            }
        }

        result
    }

    async fn place(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        let customer = self
            .customers
            .find_by_id(&request.customer_id)
            .await?
            .ok_or(OrderError::CustomerNotFound)?;

        let existing = self.products.find_all_by_id(&request.products).await?;
        if existing.is_empty() {
            return Err(OrderError::NoProductsFound);
        }

        let catalog: HashMap<&ProductId, &Product> =
            existing.iter().map(|p| (&p.id, p)).collect();

        if let Some(missing) = request
            .products
            .iter()
            .find(|line| !catalog.contains_key(&line.id))
        {
            return Err(OrderError::ProductNotFound(missing.id.clone()));
        }

        // Every line is known past this point.
        let matched: Vec<(&ProductLine, &Product)> = request
            .products
            .iter()
            .map(|line| (line, catalog[&line.id]))
            .collect();

        if let Some((line, _)) = matched
            .iter()
            .find(|(line, product)| line.quantity > product.quantity)
        {
            return Err(OrderError::InsufficientStock {
                product_id: line.id.clone(),
                quantity: line.quantity,
            });
        }

        let lines = matched
            .iter()
            .map(|(line, product)| OrderLine::new(line.id.clone(), line.quantity, product.price))
            .collect();

        let order = self
            .orders
            .create(NewOrder {
                customer,
                products: lines,
            })
            .await?;

        let updates = matched
            .iter()
            .map(|(line, product)| StockUpdate {
                id: line.id.clone(),
                quantity: product.quantity - line.quantity,
            })
            .collect();

        if let Err(e) = self.products.update_quantity(updates).await {
            tracing::error!(order_id = %order.id, error = %e, "stock update failed after order was created");
            return Err(e.into());
        }

        Ok(order)
    }
}
