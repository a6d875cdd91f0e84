//! # Payment Status Types
//!
//! Result of a payment status query. The gateway's per-bank detail record
//! has no stable schema, so it is passed through as raw JSON.

use serde::{Deserialize, Serialize};

/// Payment status of a bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// True once the bill has been paid in full
    #[serde(rename = "isPaid", default)]
    pub is_paid: bool,

    /// Gateway-provided payment detail, passed through unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
