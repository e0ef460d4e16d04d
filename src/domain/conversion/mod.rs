//! Asset conversion: quote a swap between two assets before executing it.

#[cfg(feature = "http")]
pub mod client;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const PREVIEW_CONVERT_PATH: &str = "/api/v1/user/preview-convert-asset";

/// Conversion quote request.
///
/// Sent with snake_case keys (`from_symbol`, `to_symbol`); camelCase input is
/// accepted when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertPreviewRequest {
    #[serde(alias = "fromSymbol")]
    pub from_symbol: String,
    #[serde(alias = "toSymbol")]
    pub to_symbol: String,
    pub amount: Decimal,
}

impl ConvertPreviewRequest {
    pub fn new(from_symbol: impl Into<String>, to_symbol: impl Into<String>, amount: Decimal) -> Self {
        Self {
            from_symbol: from_symbol.into(),
            to_symbol: to_symbol.into(),
            amount,
        }
    }
}
