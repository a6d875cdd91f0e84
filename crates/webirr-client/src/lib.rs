//! # webirr-client
//!
//! Async client for the WeBirr payment gateway REST API.
//!
//! A [`WeBirrClient`] can create, update or delete a bill at the WeBirr
//! servers and query the payment status of a bill. It is a thin wrapper
//! around the REST web service: one HTTP request per call, no retries,
//! no local validation.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use webirr_client::{Environment, GatewayConfig, WeBirrClient};
//! use webirr_core::Bill;
//!
//! let client = WeBirrClient::new(GatewayConfig::new(api_key, Environment::Test));
//!
//! let bill = Bill::new("270.90", "cc01", "Elias Haileselassie", "drt/2021/125", merchant_id)
//!     .with_description("hotel booking");
//!
//! match client.create_bill(&bill).await? {
//!     ApiResponse::Success(payment_code) => {
//!         // Customer pays using this code; keep it for status queries
//!         println!("payment code: {payment_code}");
//!     }
//!     ApiResponse::Failure(reason) => eprintln!("create failed: {reason}"),
//! }
//! ```
//!
//! ## Payment Status
//!
//! ```rust,ignore
//! let status = client.get_payment_status(&payment_code).await?;
//! if let Some(payment) = status.payload() {
//!     if payment.is_paid {
//!         println!("paid: {:?}", payment.data);
//!     }
//! }
//! ```

pub mod client;
pub mod config;

// Re-exports
pub use client::WeBirrClient;
pub use config::{Environment, GatewayConfig, PRODUCTION_BASE_URL, TEST_BASE_URL};
pub use webirr_core::{ApiResponse, Bill, GatewayError, GatewayResult, Payment};
