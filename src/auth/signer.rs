//! HMAC-SHA256 request signer.

use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;

use crate::auth::secret::SigningSecret;
use crate::error::ConfigError;

type HmacSha256 = Hmac<Sha256>;

/// Timestamp and signature attached to a signed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSignature {
    /// Milliseconds since the Unix epoch, as a decimal string.
    pub timestamp: String,
    /// Lowercase hex HMAC-SHA256 digest.
    pub signature: String,
}

/// The exact string the signature covers: `timestamp` immediately followed by
/// the compact JSON of `payload`, keys in insertion order.
pub fn canonical_message(timestamp: &str, payload: &Value) -> String {
    format!("{}{}", timestamp, payload)
}

/// Signs payloads with a derived [`SigningSecret`].
#[derive(Debug, Clone)]
pub struct Signer {
    secret: SigningSecret,
}

impl Signer {
    /// Build a signer from the configured secret key.
    ///
    /// Fails with [`ConfigError::MissingSecretKey`] when there is no key.
    pub fn new(secret_key: Option<&str>) -> Result<Self, ConfigError> {
        let secret_key = secret_key
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingSecretKey)?;
        Ok(Self {
            secret: SigningSecret::derive(secret_key),
        })
    }

    /// Sign `payload` with the current wall-clock time.
    pub fn sign(&self, payload: &Value) -> Result<RequestSignature, ConfigError> {
        self.sign_at(payload, chrono::Utc::now().timestamp_millis())
    }

    /// Sign `payload` as of `timestamp_ms`.
    pub fn sign_at(
        &self,
        payload: &Value,
        timestamp_ms: i64,
    ) -> Result<RequestSignature, ConfigError> {
        let timestamp = timestamp_ms.to_string();
        let message = canonical_message(&timestamp, payload);

        // Any key length is accepted; the error arm is never taken.
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|e| ConfigError::InvalidSigningKey(e.to_string()))?;
        mac.update(message.as_bytes());

        Ok(RequestSignature {
            timestamp,
            signature: hex::encode(mac.finalize().into_bytes()),
        })
    }
}
