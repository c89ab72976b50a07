//! Local runner for the create-order workflow.
//!
//! Wires `CreateOrderService` to in-memory stores seeded with a small demo
//! catalog, and sets up structured logging.

pub mod config;
pub mod error;

use common::Money;
use domain::{
    CreateOrderRequest, CreateOrderService, Customer, InMemoryCustomerRepository,
    InMemoryOrderRepository, InMemoryProductRepository, Order, Product,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::{Config, LogFormat};
use error::AppError;

/// Service type used by the runner.
pub type LocalOrderService = CreateOrderService<
    InMemoryOrderRepository,
    InMemoryProductRepository,
    InMemoryCustomerRepository,
>;

/// Installs the global tracing subscriber.
pub fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so stdout carries only the order JSON.
    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

/// Returns the demo customers.
pub fn seed_customers() -> Vec<Customer> {
    vec![
        Customer::new("cus_ada", "Ada Lovelace", "ada@example.com"),
        Customer::new("cus_grace", "Grace Hopper", "grace@example.com"),
    ]
}

/// Returns the demo catalog.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("SKU-001", "Widget", Money::from_cents(250), 10),
        Product::new("SKU-002", "Gadget", Money::from_cents(1999), 5),
        Product::new("SKU-003", "Gizmo", Money::from_cents(799), 0),
    ]
}

/// Builds a service over freshly seeded in-memory stores.
pub fn create_seeded_service() -> LocalOrderService {
    CreateOrderService::new(
        InMemoryOrderRepository::new(),
        InMemoryProductRepository::with_products(seed_products()),
        InMemoryCustomerRepository::with_customers(seed_customers()),
    )
}

/// Parses a JSON order request, places it, and returns the order as JSON.
pub async fn place_order_json(
    service: &LocalOrderService,
    input: &str,
) -> Result<String, AppError> {
    let request: CreateOrderRequest = serde_json::from_str(input)?;
    let order: Order = service.execute(request).await?;
    Ok(serde_json::to_string_pretty(&order)?)
}
