//! Resource groups organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Request/response types and endpoint paths
//! - `client.rs`: Sub-client borrowing [`WalletPayClient`](crate::client::WalletPayClient)
//!   (only with the `http` feature)
//!
//! Apart from verification, sub-clients hand back the decoded response body
//! untouched as `serde_json::Value`. Request types are typed; response bodies
//! are not validated.

pub mod bank_transfer;
pub mod conversion;
pub mod oauth;
pub mod subaccount;
pub mod transfer;
pub mod verification;
pub mod wallet;
