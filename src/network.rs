//! Network URL constants and environment variable names.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.walletpay.co";

/// Environment variable holding the public API key.
pub const ENV_PUBLIC_KEY: &str = "WALLETPAY_PUBLIC_KEY";

/// Environment variable holding the secret key (optional).
pub const ENV_SECRET_KEY: &str = "WALLETPAY_SECRET_KEY";

/// Environment variable overriding [`DEFAULT_API_URL`].
pub const ENV_BASE_URL: &str = "WALLETPAY_BASE_URL";
