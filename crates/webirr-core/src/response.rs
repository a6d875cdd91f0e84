//! # Gateway Response Shape
//!
//! Every WeBirr endpoint replies with the same envelope:
//! `{ "error": <string|null>, "res": <payload|null> }`, exactly one of the
//! two populated. `ApiResponse` models that envelope as a tagged union so
//! callers cannot observe a both-or-neither state.

use crate::error::{GatewayError, GatewayResult};
use serde::de::{self, DeserializeOwned};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Uniform reply from the gateway: a payload or an error description
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    /// The gateway accepted the request; carries the result payload
    Success(T),
    /// The gateway (or the HTTP layer) rejected the request
    Failure(String),
}

impl<T> ApiResponse<T> {
    /// Failure synthesized from a non-200 HTTP status
    pub fn http_error(code: u16, reason: &str) -> Self {
        ApiResponse::Failure(format!("http error {} {}", code, reason))
    }

    /// Returns true if the gateway accepted the request
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// The error description, if the request failed
    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure(reason) => Some(reason),
        }
    }

    /// The result payload, if the request succeeded
    pub fn payload(&self) -> Option<&T> {
        match self {
            ApiResponse::Success(payload) => Some(payload),
            ApiResponse::Failure(_) => None,
        }
    }

    /// Convert a failure into a typed `GatewayError::Gateway`
    pub fn into_result(self) -> GatewayResult<T> {
        match self {
            ApiResponse::Success(payload) => Ok(payload),
            ApiResponse::Failure(reason) => Err(GatewayError::Gateway(reason)),
        }
    }
}

/// Wire envelope as the gateway actually sends it
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    res: Option<T>,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let envelope = Envelope::<T>::deserialize(deserializer)?;
        match (envelope.error, envelope.res) {
            // A reported error wins even if the gateway also sent a payload
            (Some(reason), _) => Ok(ApiResponse::Failure(reason)),
            (None, Some(payload)) => Ok(ApiResponse::Success(payload)),
            (None, None) => Err(de::Error::custom(
                "gateway reply carries neither `error` nor `res`",
            )),
        }
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut envelope = serializer.serialize_struct("ApiResponse", 2)?;
        match self {
            ApiResponse::Success(payload) => {
                envelope.serialize_field("error", &None::<String>)?;
                envelope.serialize_field("res", payload)?;
            }
            ApiResponse::Failure(reason) => {
                envelope.serialize_field("error", reason)?;
                envelope.serialize_field("res", &None::<String>)?;
            }
        }
        envelope.end()
    }
}
