//! Wallet sub-client.

use serde_json::Value;

use crate::client::WalletPayClient;
use crate::domain::wallet::SUPPORTED_WALLETS_PATH;
use crate::error::SdkError;
use crate::http::NoParams;

pub struct Wallet<'a> {
    pub(crate) client: &'a WalletPayClient,
}

impl<'a> Wallet<'a> {
    pub async fn supported(&self) -> Result<Value, SdkError> {
        self.client.http.get(SUPPORTED_WALLETS_PATH, &NoParams {}).await
    }
}
