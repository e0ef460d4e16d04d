//! Unified SDK error types.

use serde_json::{Map, Value};
use thiserror::Error;

/// Prefix carried by every request failure surfaced to callers.
pub const REQUEST_FAILED_PREFIX: &str = "API Request Failed: ";

/// Fallback message for a verification failure with no usable text.
pub const VERIFICATION_FALLBACK_MESSAGE: &str = "Payment verification failed";

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Verification(#[from] PaymentVerificationError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
///
/// `Transport` and `Remote` share the `API Request Failed: ` prefix; they are
/// separate variants so callers can still branch on whether a response arrived.
#[derive(Error, Debug)]
pub enum HttpError {
    /// No response was received (connection refused, DNS, TLS, ...).
    #[error("API Request Failed: {0}")]
    Transport(String),

    /// A response arrived but signalled failure, either by status code or by
    /// a `success: false` flag on a 2xx body.
    #[error("API Request Failed: {message}")]
    Remote {
        status: u16,
        message: String,
        body: Value,
    },

    #[error("Invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

impl HttpError {
    /// HTTP status of a remote failure, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw decoded response body of a remote failure.
    pub fn body(&self) -> Option<&Value> {
        match self {
            HttpError::Remote { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        HttpError::Transport(e.to_string())
    }
}

/// Client configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration error: public key is required")]
    MissingPublicKey,

    /// Signing was attempted on a client built without a secret key.
    #[error("Configuration error: secret key is required to sign requests")]
    MissingSecretKey,

    #[error("Configuration error: invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// HMAC key setup failed. HMAC-SHA256 takes keys of any length, so this
    /// is not produced in practice.
    #[error("Configuration error: {0}")]
    InvalidSigningKey(String),
}

/// Error raised by the payment verification sub-client.
///
/// Always reports `status == "error"` and an empty `data` object so callers can
/// handle it the same way as a failed [`VerifyResult`](crate::domain::verification::VerifyResult).
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct PaymentVerificationError {
    message: String,
    data: Value,
}

impl PaymentVerificationError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            message: if message.is_empty() {
                VERIFICATION_FALLBACK_MESSAGE.to_string()
            } else {
                message
            },
            data: Value::Object(Map::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> &'static str {
        "error"
    }

    pub fn data(&self) -> &Value {
        &self.data
    }
}

impl From<HttpError> for PaymentVerificationError {
    fn from(e: HttpError) -> Self {
        PaymentVerificationError::new(e.to_string())
    }
}

impl From<SdkError> for PaymentVerificationError {
    fn from(e: SdkError) -> Self {
        match e {
            SdkError::Verification(inner) => inner,
            other => PaymentVerificationError::new(other.to_string()),
        }
    }
}
