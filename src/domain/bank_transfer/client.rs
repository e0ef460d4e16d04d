//! Bank transfer sub-client: bank list, account name lookup, payouts.

use serde_json::Value;

use crate::client::WalletPayClient;
use crate::domain::bank_transfer::{
    BankTransferRequest, VerifyBankAccountRequest, BANKS_PATH, BANK_TRANSFER_PATH,
    VERIFY_ACCOUNT_PATH,
};
use crate::error::SdkError;
use crate::http::NoParams;

pub struct BankTransfers<'a> {
    pub(crate) client: &'a WalletPayClient,
}

impl<'a> BankTransfers<'a> {
    pub async fn banks(&self) -> Result<Value, SdkError> {
        self.client.http.get(BANKS_PATH, &NoParams {}).await
    }

    /// Resolve the account holder's name before sending money.
    pub async fn verify_account(&self, request: &VerifyBankAccountRequest) -> Result<Value, SdkError> {
        validate_account(&request.account_number, &request.bank_code)?;
        self.client.http.post(VERIFY_ACCOUNT_PATH, request).await
    }

    pub async fn transfer(&self, request: &BankTransferRequest) -> Result<Value, SdkError> {
        validate_account(&request.account_number, &request.bank_code)?;
        if request.amount.is_sign_negative() || request.amount.is_zero() {
            return Err(SdkError::Validation("amount must be positive".to_string()));
        }
        self.client.http.post(BANK_TRANSFER_PATH, request).await
    }
}

fn validate_account(account_number: &str, bank_code: &str) -> Result<(), SdkError> {
    if account_number.trim().is_empty() {
        return Err(SdkError::Validation("account_number cannot be empty".to_string()));
    }
    if bank_code.trim().is_empty() {
        return Err(SdkError::Validation("bank_code cannot be empty".to_string()));
    }
    Ok(())
}
