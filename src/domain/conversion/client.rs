//! Conversion sub-client.

use serde_json::Value;

use crate::client::WalletPayClient;
use crate::domain::conversion::{ConvertPreviewRequest, PREVIEW_CONVERT_PATH};
use crate::error::SdkError;

pub struct Conversion<'a> {
    pub(crate) client: &'a WalletPayClient,
}

impl<'a> Conversion<'a> {
    /// Quote converting `amount` of `from_symbol` into `to_symbol`.
    pub async fn preview(&self, request: &ConvertPreviewRequest) -> Result<Value, SdkError> {
        if request.from_symbol.is_empty() || request.to_symbol.is_empty() {
            return Err(SdkError::Validation(
                "from_symbol and to_symbol are required".to_string(),
            ));
        }
        self.client.http.post(PREVIEW_CONVERT_PATH, request).await
    }
}
