//! Subaccounts sub-client.

use serde_json::Value;

use crate::client::WalletPayClient;
use crate::domain::subaccount::{CreateSubaccountRequest, CREATE_SUBACCOUNT_PATH};
use crate::error::SdkError;

pub struct Subaccounts<'a> {
    pub(crate) client: &'a WalletPayClient,
}

impl<'a> Subaccounts<'a> {
    pub async fn create(&self, request: &CreateSubaccountRequest) -> Result<Value, SdkError> {
        if request.name.trim().is_empty() {
            return Err(SdkError::Validation("name cannot be empty".to_string()));
        }
        self.client.http.post(CREATE_SUBACCOUNT_PATH, request).await
    }
}
