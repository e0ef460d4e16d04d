//! High-level client: `WalletPayClient` with nested sub-client accessors.
//!
//! Each resource group has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::config::{resolve_base_url, ClientConfig};
use crate::domain::bank_transfer::client::BankTransfers;
use crate::domain::conversion::client::Conversion;
use crate::domain::oauth::client::OAuth;
use crate::domain::subaccount::client::Subaccounts;
use crate::domain::transfer::client::Transfer;
use crate::domain::verification::client::Verification;
use crate::domain::wallet::client::Wallet;
use crate::error::{ConfigError, SdkError};
use crate::http::WalletPayHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::bank_transfer::client::BankTransfers as BankTransfersClient;
pub use crate::domain::conversion::client::Conversion as ConversionClient;
pub use crate::domain::oauth::client::OAuth as OAuthClient;
pub use crate::domain::subaccount::client::Subaccounts as SubaccountsClient;
pub use crate::domain::transfer::client::Transfer as TransferClient;
pub use crate::domain::verification::client::Verification as VerificationClient;
pub use crate::domain::wallet::client::Wallet as WalletClient;

/// The primary entry point for the SDK.
///
/// Holds only immutable configuration, so a single instance can be shared and
/// called concurrently. Provides nested sub-client accessors for each resource
/// group: `client.transfer()`, `client.oauth()`, etc.
#[derive(Debug, Clone)]
pub struct WalletPayClient {
    pub(crate) http: WalletPayHttp,
}

impl WalletPayClient {
    pub fn builder() -> WalletPayClientBuilder {
        WalletPayClientBuilder::default()
    }

    pub fn new(config: ClientConfig) -> Result<Self, SdkError> {
        Self::builder().config(config).build()
    }

    /// Build from `WALLETPAY_PUBLIC_KEY`, `WALLETPAY_SECRET_KEY`, `WALLETPAY_BASE_URL`.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn public_key(&self) -> &str {
        self.http.config().public_key()
    }

    /// `true` when no secret key is configured and requests go out unsigned.
    pub fn is_public_mode(&self) -> bool {
        !self.http.config().has_secret_key()
    }

    /// The underlying request executor, for endpoints without a sub-client.
    pub fn http(&self) -> &WalletPayHttp {
        &self.http
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn verification(&self) -> Verification<'_> {
        Verification { client: self }
    }

    pub fn subaccounts(&self) -> Subaccounts<'_> {
        Subaccounts { client: self }
    }

    pub fn conversion(&self) -> Conversion<'_> {
        Conversion { client: self }
    }

    pub fn transfer(&self) -> Transfer<'_> {
        Transfer { client: self }
    }

    pub fn wallet(&self) -> Wallet<'_> {
        Wallet { client: self }
    }

    pub fn bank_transfers(&self) -> BankTransfers<'_> {
        BankTransfers { client: self }
    }

    pub fn oauth(&self) -> OAuth<'_> {
        OAuth { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct WalletPayClientBuilder {
    public_key: Option<String>,
    secret_key: Option<String>,
    base_url: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl WalletPayClientBuilder {
    pub fn public_key(mut self, key: &str) -> Self {
        self.public_key = Some(key.to_string());
        self
    }

    /// Enables signed requests. Leave unset for public mode.
    pub fn secret_key(mut self, key: &str) -> Self {
        self.secret_key = Some(key.to_string());
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Start from an existing configuration; later setters override it.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.public_key = Some(config.public_key().to_string());
        self.secret_key = config.secret_key().map(str::to_string);
        self.base_url = Some(config.base_url().to_string());
        self
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies, TLS roots).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Without an explicit base URL, `WALLETPAY_BASE_URL` is used when set.
    pub fn build(self) -> Result<WalletPayClient, SdkError> {
        let public_key = self.public_key.ok_or(ConfigError::MissingPublicKey)?;

        let mut config = ClientConfig::new(public_key);
        if let Some(secret_key) = self.secret_key {
            config = config.with_secret_key(secret_key);
        }
        config = config.with_base_url(resolve_base_url(self.base_url, |name| {
            std::env::var(name).ok()
        }));
        let config = config.validate()?;

        let http = match self.http_client {
            Some(client) => WalletPayHttp::with_client(config, client),
            None => WalletPayHttp::new(config)?,
        };

        Ok(WalletPayClient { http })
    }
}

impl std::fmt::Debug for WalletPayClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletPayClientBuilder")
            .field("public_key", &self.public_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_public_key() {
        let err = WalletPayClient::builder().build().unwrap_err();
        assert!(matches!(err, SdkError::Config(ConfigError::MissingPublicKey)));
    }

    #[test]
    fn test_builder_public_mode() {
        let client = WalletPayClient::builder()
            .public_key("pk")
            .base_url("https://sandbox.walletpay.co/")
            .build()
            .unwrap();
        assert!(client.is_public_mode());
        assert_eq!(client.public_key(), "pk");
        assert_eq!(client.base_url(), "https://sandbox.walletpay.co");
    }

    #[test]
    fn test_builder_secret_mode() {
        let client = WalletPayClient::builder()
            .public_key("pk")
            .secret_key("LIVE;SK;tok")
            .base_url("https://sandbox.walletpay.co")
            .build()
            .unwrap();
        assert!(!client.is_public_mode());
    }

    #[test]
    fn test_builder_rejects_bad_base_url() {
        let err = WalletPayClient::builder()
            .public_key("pk")
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, SdkError::Config(ConfigError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_new_from_config() {
        let config = ClientConfig::new("pk")
            .with_secret_key("sk")
            .with_base_url("http://localhost:9000");
        let client = WalletPayClient::new(config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert!(!client.is_public_mode());
    }
}
