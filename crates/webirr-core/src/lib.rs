//! # webirr-core
//!
//! Core types for the WeBirr payment gateway client.
//!
//! This crate provides:
//! - `Bill` for describing an invoice submitted to the gateway
//! - `ApiResponse` for the gateway's uniform success-or-error reply
//! - `Payment` for the result of a payment status query
//! - `GatewayError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use webirr_core::{ApiResponse, Bill};
//!
//! let bill = Bill::new("270.90", "cc01", "Elias Haileselassie", "drt/2021/125", "m01")
//!     .with_description("hotel booking");
//!
//! // A client submits the bill and hands back an ApiResponse<String>
//! let response: ApiResponse<String> = client.create_bill(&bill).await?;
//!
//! match response {
//!     ApiResponse::Success(payment_code) => println!("pay with code {payment_code}"),
//!     ApiResponse::Failure(reason) => eprintln!("gateway rejected bill: {reason}"),
//! }
//! ```

pub mod bill;
pub mod error;
pub mod payment;
pub mod response;

// Re-exports for convenience
pub use bill::Bill;
pub use error::{GatewayError, GatewayResult};
pub use payment::Payment;
pub use response::ApiResponse;
