//! Wallets: assets and networks the platform supports.

#[cfg(feature = "http")]
pub mod client;

pub const SUPPORTED_WALLETS_PATH: &str = "/api/v1/wallet/supported";
