//! # WeBirr Client
//!
//! Async wrapper for the WeBirr REST API. Each operation performs exactly
//! one HTTP round trip and maps the reply into an [`ApiResponse`]; there
//! are no retries and no local precondition checks.

use crate::config::GatewayConfig;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};
use webirr_core::{ApiResponse, Bill, GatewayError, GatewayResult, Payment};

const POST_BILL_PATH: &str = "/einvoice/api/postbill";
const DELETE_BILL_PATH: &str = "/einvoice/api/deletebill";
const PAYMENT_STATUS_PATH: &str = "/einvoice/api/getPaymentStatus";

/// Client for the WeBirr payment gateway
///
/// Immutable after construction; holds no session state, so a single
/// instance can serve any number of concurrent calls.
pub struct WeBirrClient {
    config: GatewayConfig,
    client: Client,
}

impl WeBirrClient {
    /// Create a new client from a config
    pub fn new(config: GatewayConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> GatewayResult<Self> {
        let config = GatewayConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// The active configuration
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Create a new bill at the gateway.
    ///
    /// On success the payload is the gateway-assigned payment code the
    /// customer uses to pay, and which later `update_bill`, `delete_bill`
    /// and `get_payment_status` calls refer to.
    #[instrument(skip(self, bill), fields(bill_reference = %bill.bill_reference))]
    pub async fn create_bill(&self, bill: &Bill) -> GatewayResult<ApiResponse<String>> {
        let url = format!("{}{}", self.config.base_url, POST_BILL_PATH);
        let request = self
            .client
            .post(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .json(bill);

        self.dispatch(request).await
    }

    /// Update an existing, not-yet-paid bill.
    ///
    /// The bill's `bill_reference` must match the original bill; the
    /// gateway enforces this and replies with `"OK"` on success.
    #[instrument(skip(self, bill), fields(bill_reference = %bill.bill_reference))]
    pub async fn update_bill(&self, bill: &Bill) -> GatewayResult<ApiResponse<String>> {
        let url = format!("{}{}", self.config.base_url, POST_BILL_PATH);
        let request = self
            .client
            .put(&url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .json(bill);

        self.dispatch(request).await
    }

    /// Delete an existing, not-yet-paid bill. Replies `"OK"` on success.
    #[instrument(skip(self))]
    pub async fn delete_bill(&self, payment_code: &str) -> GatewayResult<ApiResponse<String>> {
        let url = format!("{}{}", self.config.base_url, DELETE_BILL_PATH);
        let request = self.client.put(&url).query(&[
            ("api_key", self.config.api_key.as_str()),
            ("wbc_code", payment_code),
        ]);

        self.dispatch(request).await
    }

    /// Get the payment status of a bill
    #[instrument(skip(self))]
    pub async fn get_payment_status(
        &self,
        payment_code: &str,
    ) -> GatewayResult<ApiResponse<Payment>> {
        let url = format!("{}{}", self.config.base_url, PAYMENT_STATUS_PATH);
        let request = self.client.get(&url).query(&[
            ("api_key", self.config.api_key.as_str()),
            ("wbc_code", payment_code),
        ]);

        self.dispatch(request).await
    }

    /// Send one request and normalize the reply.
    ///
    /// HTTP 200 bodies are passed through as the gateway's envelope; any
    /// other status is folded into a `Failure` carrying
    /// `"http error <code> <text>"`. Transport and parse failures
    /// propagate as `Err`.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> GatewayResult<ApiResponse<T>> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("gateway returned http error: status={}", status);
            return Ok(ApiResponse::http_error(
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        debug!("gateway reply: {} bytes", body.len());

        serde_json::from_str(&body).map_err(|e| {
            GatewayError::Serialization(format!("Failed to parse gateway reply: {}", e))
        })
    }
}
