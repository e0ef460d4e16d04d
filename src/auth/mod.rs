//! Request authentication: signing secret derivation, HMAC signing, header composition.
//!
//! ## Modes
//!
//! - **Secret mode**: a secret key is configured. Every request carries
//!   `api-key`, `x-secret-key`, `x-timestamp` and `x-signature`, where the
//!   signature is `hex(HMAC-SHA256(signing_secret, timestamp + json(payload)))`.
//! - **Public mode**: no secret key. Only `api-key` is sent, for contexts where
//!   the secret must not be shipped (browsers, mobile apps).
//!
//! Nothing here performs I/O, so it is available without the `http` feature.

pub mod headers;
pub mod secret;
pub mod signer;

pub use headers::{build_headers, build_headers_at, SignedHeaders};
pub use secret::SigningSecret;
pub use signer::{canonical_message, RequestSignature, Signer};
