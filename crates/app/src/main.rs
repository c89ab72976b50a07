//! Places one order read from stdin against the seeded catalog.
//!
//! ```bash
//! echo '{"customer_id":"cus_ada","products":[{"id":"SKU-001","quantity":3}]}' \
//!     | cargo run -p app --bin place-order
//! ```

use std::io::Read;
use std::process::ExitCode;

use app::config::Config;
use app::error::AppError;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();
    app::init_tracing(&config);

    match run().await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "order placement failed");
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> Result<String, AppError> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let service = app::create_seeded_service();
    app::place_order_json(&service, &input).await
}
