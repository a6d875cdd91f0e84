//! # Bill Types
//!
//! A `Bill` is an invoice submitted to the WeBirr gateway. The gateway is
//! the source of truth for correctness; the client performs no validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp format the gateway expects in `Bill::time`
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// An invoice or bill for a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Amount due, as a decimal string (e.g. "270.90")
    pub amount: String,

    /// Customer code in the merchant's system
    pub customer_code: String,

    /// Customer display name
    pub customer_name: String,

    /// Bill timestamp, `YYYY-MM-DD HH:MM`
    pub time: String,

    /// Free-form description shown to the payer
    #[serde(default)]
    pub description: String,

    /// Caller-assigned reference, reused to update the same bill later
    pub bill_reference: String,

    /// Merchant ID assigned by WeBirr
    #[serde(rename = "merchantID")]
    pub merchant_id: String,
}

impl Bill {
    /// Create a bill timestamped now, with an empty description
    pub fn new(
        amount: impl Into<String>,
        customer_code: impl Into<String>,
        customer_name: impl Into<String>,
        bill_reference: impl Into<String>,
        merchant_id: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            customer_code: customer_code.into(),
            customer_name: customer_name.into(),
            time: Utc::now().format(TIME_FORMAT).to_string(),
            description: String::new(),
            bill_reference: bill_reference.into(),
            merchant_id: merchant_id.into(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the bill time from a timestamp, formatted for the gateway
    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = time.format(TIME_FORMAT).to_string();
        self
    }

    /// Set the bill time from an already formatted string
    pub fn with_raw_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }
}
