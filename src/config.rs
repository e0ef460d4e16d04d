//! Client configuration: keys and base URL, captured once at construction.

use crate::error::ConfigError;
use crate::network::{DEFAULT_API_URL, ENV_BASE_URL, ENV_PUBLIC_KEY, ENV_SECRET_KEY};

/// Immutable client configuration.
///
/// Without a secret key the client runs in public mode: requests carry only the
/// `api-key` header and are never signed.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    public_key: String,
    secret_key: Option<String>,
    base_url: String,
}

impl ClientConfig {
    /// Public-mode configuration against [`DEFAULT_API_URL`].
    ///
    /// Reads nothing from the environment; see [`ClientConfig::from_env`].
    pub fn new(public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            secret_key: None,
            base_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        let secret_key = secret_key.into();
        // An empty secret is the same as none at all.
        self.secret_key = (!secret_key.is_empty()).then_some(secret_key);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read `WALLETPAY_PUBLIC_KEY`, `WALLETPAY_SECRET_KEY` and `WALLETPAY_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let public_key = lookup(ENV_PUBLIC_KEY).ok_or(ConfigError::MissingPublicKey)?;
        let mut config = Self {
            public_key,
            secret_key: None,
            base_url: resolve_base_url(None, &lookup),
        };
        if let Some(secret) = lookup(ENV_SECRET_KEY) {
            config = config.with_secret_key(secret);
        }
        config.validate()
    }

    /// Check required fields and normalize the base URL.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        if self.public_key.trim().is_empty() {
            return Err(ConfigError::MissingPublicKey);
        }
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty()
            || !(trimmed.starts_with("https://") || trimmed.starts_with("http://"))
        {
            return Err(ConfigError::InvalidBaseUrl(self.base_url));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub(crate) fn secret_key(&self) -> Option<&str> {
        self.secret_key.as_deref()
    }

    pub fn has_secret_key(&self) -> bool {
        self.secret_key.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("public_key", &self.public_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Explicit URL, else `WALLETPAY_BASE_URL` from `lookup`, else [`DEFAULT_API_URL`].
pub(crate) fn resolve_base_url<F>(explicit: Option<String>, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    explicit
        .or_else(|| lookup(ENV_BASE_URL).filter(|url| !url.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}
