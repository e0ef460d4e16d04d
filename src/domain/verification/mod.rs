//! Payment verification: the one endpoint whose response is reshaped.
//!
//! The platform answers a verification either with the payment object or with
//! a bare sentinel string. Known "soft" failures become a [`VerifyResult`] with
//! `status == Error` instead of an error, so callers can branch on the status.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::is_truthy;

/// Body returned when the API key is rejected.
pub const ACCESS_DENIED: &str = "Access Denied, Invalid KEY supplied";

/// Body returned for an unknown transaction id.
pub const INVALID_PAYMENT_ID: &str = "invalid payment id supplied";

/// Message reported when the platform answers with an empty body.
pub const EMPTY_RESPONSE_MESSAGE: &str =
    "Something went wrong, be sure you supplied a valid payment id.";

pub(crate) fn verify_endpoint(transaction_id: &str) -> String {
    format!(
        "/api/v1/pay/crypto/payment/{}",
        urlencoding::encode(transaction_id)
    )
}

/// Body sent with a verification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    pub transaction_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifyStatus {
    Success,
    Error,
}

/// Normalized verification outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResult {
    pub status: VerifyStatus,
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VerifyResult {
    pub fn success(data: Value) -> Self {
        Self {
            status: VerifyStatus::Success,
            data: Some(data),
            message: None,
        }
    }

    pub fn error(message: Option<String>) -> Self {
        Self {
            status: VerifyStatus::Error,
            data: None,
            message,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == VerifyStatus::Success
    }

    /// Shape a decoded verification response body.
    ///
    /// Bodies that are neither JSON objects/arrays nor a known sentinel are
    /// reported as errors with no data.
    pub fn from_body(body: Value) -> Self {
        if !is_truthy(&body) {
            return Self::error(Some(EMPTY_RESPONSE_MESSAGE.to_string()));
        }
        match body {
            Value::String(s) if s == ACCESS_DENIED => Self::error(Some(s)),
            Value::String(s) if s == INVALID_PAYMENT_ID => Self::error(None),
            body @ (Value::Object(_) | Value::Array(_)) => Self::success(body),
            other => {
                tracing::debug!(body = %other, "Unrecognized verification response");
                Self::error(None)
            }
        }
    }
}
