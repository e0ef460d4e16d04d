//! Bank transfers: fiat payouts to bank accounts.

#[cfg(feature = "http")]
pub mod client;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const BANKS_PATH: &str = "/api/v1/bank-transfers/banks";
pub const VERIFY_ACCOUNT_PATH: &str = "/api/v1/bank-transfers/verify-account";
pub const BANK_TRANSFER_PATH: &str = "/api/v1/bank-transfers";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyBankAccountRequest {
    pub account_number: String,
    pub bank_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTransferRequest {
    pub account_number: String,
    pub bank_code: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_account_wire_keys() {
        let req = VerifyBankAccountRequest {
            account_number: "0123456789".to_string(),
            bank_code: "058".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"accountNumber":"0123456789","bankCode":"058"}"#
        );
    }
}
