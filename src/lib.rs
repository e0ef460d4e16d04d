//! # WalletPay SDK
//!
//! A Rust SDK for the WalletPay payments API: crypto payment verification,
//! subaccounts, conversions, transfers, bank payouts and OAuth.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Configuration, error types, response envelope, error-message extraction
//! 2. **Auth**: Signing secret derivation, HMAC-SHA256 signing, header composition
//! 3. **HTTP API**: `WalletPayHttp`, the authenticated request executor
//! 4. **High-Level Client**: `WalletPayClient` with nested sub-clients per resource group
//!
//! Layers 1–2 perform no I/O and are always available. Layers 3–4 need the
//! `http` feature (on by default).
//!
//! ## Modes
//!
//! With a secret key every request is signed (`x-timestamp`, `x-signature`).
//! Without one the client runs in public mode and sends only `api-key`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use walletpay_sdk::prelude::*;
//!
//! let client = WalletPayClient::builder()
//!     .public_key("pk_live_...")
//!     .secret_key("LIVE;SK;...")
//!     .build()?;
//!
//! let result = client.verification().verify("tx_123").await?;
//! if result.is_success() {
//!     println!("paid: {:?}", result.data);
//! }
//!
//! let fee = client.transfer().fee(&TransferFeeParams {
//!     symbol: "USDT".into(),
//!     amount: "25".parse()?,
//!     network: None,
//! }).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// Network URL constants and environment variable names.
pub mod network;

/// Client configuration.
pub mod config;

/// Shared JSON helpers.
pub mod shared;

/// Human-readable message extraction from failure bodies.
pub mod error_message;

/// Resource groups: request/response types and sub-clients.
pub mod domain;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Signing secret derivation, request signing, header composition.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// Authenticated request executor.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `WalletPayClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Configuration + network
    pub use crate::config::ClientConfig;
    pub use crate::network::DEFAULT_API_URL;

    // Errors
    pub use crate::error::{
        ConfigError, HttpError, PaymentVerificationError, SdkError, REQUEST_FAILED_PREFIX,
    };
    pub use crate::error_message::extract_message;

    // Auth
    pub use crate::auth::{build_headers, RequestSignature, SignedHeaders, Signer, SigningSecret};

    // Domain types
    pub use crate::domain::bank_transfer::{BankTransferRequest, VerifyBankAccountRequest};
    pub use crate::domain::conversion::ConvertPreviewRequest;
    pub use crate::domain::oauth::{
        AuthorizeParams, GrantType, RegisterAppRequest, RevokeTokenRequest, TokenRequest,
    };
    pub use crate::domain::subaccount::CreateSubaccountRequest;
    pub use crate::domain::transfer::{TransferFeeParams, TransferHistoryParams, TransferRequest};
    pub use crate::domain::verification::{VerifyResult, VerifyStatus};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        BankTransfersClient, ConversionClient, OAuthClient, SubaccountsClient, TransferClient,
        VerificationClient, WalletClient, WalletPayClient, WalletPayClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{Method, NoParams, WalletPayHttp};
}
