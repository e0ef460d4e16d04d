//! HTTP client layer: `WalletPayHttp`, the authenticated request executor.

pub mod client;

pub use client::{NoParams, WalletPayHttp};
pub use reqwest::Method;
