use criterion::{Criterion, criterion_group, criterion_main};
use domain::{
    CreateOrderRequest, CreateOrderService, Customer, InMemoryCustomerRepository,
    InMemoryOrderRepository, InMemoryProductRepository, Money, Product, ProductLine,
};

const CATALOG_SIZE: usize = 1_000;

fn catalog() -> InMemoryProductRepository {
    InMemoryProductRepository::with_products((0..CATALOG_SIZE).map(|i| {
        Product::new(
            format!("SKU-{i:04}"),
            format!("Product {i}"),
            Money::from_cents(100 + i as i64),
            u32::MAX,
        )
    }))
}

fn customers() -> InMemoryCustomerRepository {
    InMemoryCustomerRepository::with_customers([Customer::new(
        "cus_bench",
        "Bench Customer",
        "bench@example.com",
    )])
}

fn bench_single_line(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service =
        CreateOrderService::new(InMemoryOrderRepository::new(), catalog(), customers());

    c.bench_function("create_order/single_line", |b| {
        b.iter(|| {
            rt.block_on(async {
                let request =
                    CreateOrderRequest::new("cus_bench", vec![ProductLine::new("SKU-0001", 1)]);
                service.execute(request).await.unwrap();
            });
        });
    });
}

fn bench_fifty_lines(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service =
        CreateOrderService::new(InMemoryOrderRepository::new(), catalog(), customers());
    let lines: Vec<ProductLine> = (0..50)
        .map(|i| ProductLine::new(format!("SKU-{:04}", i * 7), 1))
        .collect();

    c.bench_function("create_order/fifty_lines", |b| {
        b.iter(|| {
            rt.block_on(async {
                let request = CreateOrderRequest::new("cus_bench", lines.clone());
                service.execute(request).await.unwrap();
            });
        });
    });
}

criterion_group!(benches, bench_single_line, bench_fifty_lines);
criterion_main!(benches);
