//! Outbound header composition.

use serde_json::Value;

use crate::auth::signer::{RequestSignature, Signer};
use crate::config::ClientConfig;
use crate::error::ConfigError;

pub const HEADER_API_KEY: &str = "api-key";
pub const HEADER_SECRET_KEY: &str = "x-secret-key";
pub const HEADER_TIMESTAMP: &str = "x-timestamp";
pub const HEADER_SIGNATURE: &str = "x-signature";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Headers for one request. Built fresh per call; never cached.
///
/// The secret-mode headers travel together, so a header set is either fully
/// signed or fully public.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    api_key: String,
    signed: Option<SecretHeaders>,
}

#[derive(Clone, PartialEq, Eq)]
struct SecretHeaders {
    secret_key: String,
    signature: RequestSignature,
}

impl SignedHeaders {
    pub fn is_signed(&self) -> bool {
        self.signed.is_some()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// `(name, value)` pairs in send order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        let mut pairs = vec![(HEADER_API_KEY, self.api_key.as_str())];
        if let Some(signed) = &self.signed {
            pairs.push((HEADER_SECRET_KEY, signed.secret_key.as_str()));
            pairs.push((HEADER_TIMESTAMP, signed.signature.timestamp.as_str()));
            pairs.push((HEADER_SIGNATURE, signed.signature.signature.as_str()));
        }
        pairs.push((HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON));
        pairs.into_iter()
    }
}

impl std::fmt::Debug for SignedHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedHeaders")
            .field("api_key", &self.api_key)
            .field("signed", &self.is_signed())
            .finish()
    }
}

/// Compose headers for `payload`, signing it when a secret key is configured.
pub fn build_headers(config: &ClientConfig, payload: &Value) -> Result<SignedHeaders, ConfigError> {
    build_with(config, |signer| signer.sign(payload))
}

/// Like [`build_headers`] with a fixed signing time.
pub fn build_headers_at(
    config: &ClientConfig,
    payload: &Value,
    timestamp_ms: i64,
) -> Result<SignedHeaders, ConfigError> {
    build_with(config, |signer| signer.sign_at(payload, timestamp_ms))
}

fn build_with<F>(config: &ClientConfig, sign: F) -> Result<SignedHeaders, ConfigError>
where
    F: FnOnce(&Signer) -> Result<RequestSignature, ConfigError>,
{
    let signed = match config.secret_key() {
        Some(secret_key) => {
            let signer = Signer::new(Some(secret_key))?;
            Some(SecretHeaders {
                secret_key: secret_key.to_string(),
                signature: sign(&signer)?,
            })
        }
        None => None,
    };

    Ok(SignedHeaders {
        api_key: config.public_key().to_string(),
        signed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_secret_mode_headers() {
        let config = ClientConfig::new("pk_live").with_secret_key("LIVE;SK;tok123");
        let headers = build_headers_at(&config, &json!({"a": 1}), 1234).unwrap();

        assert!(headers.is_signed());
        assert_eq!(headers.iter().count(), 5);
        assert_eq!(headers.get(HEADER_API_KEY), Some("pk_live"));
        assert_eq!(headers.get(HEADER_SECRET_KEY), Some("LIVE;SK;tok123"));
        assert_eq!(headers.get(HEADER_TIMESTAMP), Some("1234"));
        assert_eq!(headers.get(HEADER_CONTENT_TYPE), Some(CONTENT_TYPE_JSON));

        let expected = Signer::new(Some("tok123"))
            .unwrap()
            .sign_at(&json!({"a": 1}), 1234)
            .unwrap();
        assert_eq!(headers.get(HEADER_SIGNATURE), Some(expected.signature.as_str()));
    }

    #[test]
    fn test_public_mode_headers() {
        let config = ClientConfig::new("pk_pub");
        let headers = build_headers(&config, &json!({"a": 1})).unwrap();

        assert!(!headers.is_signed());
        let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec![HEADER_API_KEY, HEADER_CONTENT_TYPE]);
        assert!(!headers.contains(HEADER_SECRET_KEY));
        assert!(!headers.contains(HEADER_TIMESTAMP));
    }

    #[test]
    fn test_signature_present_iff_secret_configured() {
        let configs = [
            ClientConfig::new("pk"),
            ClientConfig::new("pk").with_secret_key(""),
            ClientConfig::new("pk").with_secret_key("plain"),
            ClientConfig::new("pk").with_secret_key("A;B;C"),
        ];
        for config in configs {
            let headers = build_headers(&config, &json!({})).unwrap();
            assert_eq!(config.has_secret_key(), headers.contains(HEADER_SIGNATURE));
            assert_eq!(config.has_secret_key(), headers.contains(HEADER_TIMESTAMP));
        }
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let headers = build_headers(&ClientConfig::new("pk"), &json!({})).unwrap();
        assert_eq!(headers.get("content-type"), Some(CONTENT_TYPE_JSON));
        assert_eq!(headers.get("API-KEY"), Some("pk"));
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = ClientConfig::new("pk").with_secret_key("hunter2");
        let headers = build_headers(&config, &json!({})).unwrap();
        assert!(!format!("{:?}", headers).contains("hunter2"));
    }
}
