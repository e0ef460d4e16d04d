//! Asset transfers: send crypto to another account, list history, quote fees.

#[cfg(feature = "http")]
pub mod client;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const TRANSFER_ASSET_PATH: &str = "/api/v1/transfer/asset";
pub const TRANSFER_HISTORY_PATH: &str = "/api/v1/transfer/history";
pub const TRANSFER_FEE_PATH: &str = "/api/v1/transfer/fee";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub recipient: String,
    pub amount: Decimal,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

/// Filters for `GET /api/v1/transfer/history`. Unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferHistoryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl TransferHistoryParams {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferFeeParams {
    pub symbol: String,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query_pairs;

    #[test]
    fn test_history_params_skip_unset() {
        let params = TransferHistoryParams::default().page(2).symbol("USDT");
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            query_pairs(&value),
            vec![
                ("page".to_string(), "2".to_string()),
                ("symbol".to_string(), "USDT".to_string()),
            ]
        );
    }

    #[test]
    fn test_fee_params_amount_as_string() {
        let params = TransferFeeParams {
            symbol: "USDT".to_string(),
            amount: Decimal::new(1050, 2),
            network: None,
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            query_pairs(&value),
            vec![
                ("symbol".to_string(), "USDT".to_string()),
                ("amount".to_string(), "10.50".to_string()),
            ]
        );
    }
}
