//! Create a bill and poll its payment status once.
//!
//! ```bash
//! export WEBIRR_API_KEY=...
//! export WEBIRR_MERCHANT_ID=...
//! export WEBIRR_ENV=test
//!
//! cargo run --example create_bill
//! ```

use webirr_client::{ApiResponse, Bill, WeBirrClient};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let client = WeBirrClient::from_env()?;
    let merchant_id = std::env::var("WEBIRR_MERCHANT_ID").unwrap_or_else(|_| "demo".to_string());

    info!("Environment: {}", client.config().environment);

    let bill = Bill::new("270.90", "cc01", "Elias Haileselassie", "drt/2021/125", merchant_id)
        .with_description("hotel booking");

    let payment_code = match client.create_bill(&bill).await? {
        ApiResponse::Success(code) => {
            info!("Bill created, payment code: {}", code);
            code
        }
        ApiResponse::Failure(reason) => {
            anyhow::bail!("create_bill failed: {reason}");
        }
    };

    match client.get_payment_status(&payment_code).await? {
        ApiResponse::Success(payment) if payment.is_paid => {
            info!("Bill is paid: {:?}", payment.data);
        }
        ApiResponse::Success(_) => {
            info!("Bill is not paid yet");
        }
        ApiResponse::Failure(reason) => {
            anyhow::bail!("get_payment_status failed: {reason}");
        }
    }

    Ok(())
}
