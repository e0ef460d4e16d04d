//! Transfer sub-client: execute transfers, history, fee quotes.

use serde_json::Value;

use crate::client::WalletPayClient;
use crate::domain::transfer::{
    TransferFeeParams, TransferHistoryParams, TransferRequest, TRANSFER_ASSET_PATH,
    TRANSFER_FEE_PATH, TRANSFER_HISTORY_PATH,
};
use crate::error::SdkError;

pub struct Transfer<'a> {
    pub(crate) client: &'a WalletPayClient,
}

impl<'a> Transfer<'a> {
    pub async fn execute(&self, request: &TransferRequest) -> Result<Value, SdkError> {
        if request.recipient.trim().is_empty() {
            return Err(SdkError::Validation("recipient cannot be empty".to_string()));
        }
        if request.amount.is_sign_negative() || request.amount.is_zero() {
            return Err(SdkError::Validation("amount must be positive".to_string()));
        }
        self.client.http.post(TRANSFER_ASSET_PATH, request).await
    }

    pub async fn history(&self, params: &TransferHistoryParams) -> Result<Value, SdkError> {
        self.client.http.get(TRANSFER_HISTORY_PATH, params).await
    }

    pub async fn fee(&self, params: &TransferFeeParams) -> Result<Value, SdkError> {
        self.client.http.get(TRANSFER_FEE_PATH, params).await
    }
}
