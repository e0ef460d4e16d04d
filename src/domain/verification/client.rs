//! Verification sub-client: crypto payment status checks.

use serde_json::Value;

use crate::client::WalletPayClient;
use crate::domain::verification::{verify_endpoint, VerifyPaymentRequest, VerifyResult};
use crate::error::PaymentVerificationError;

pub struct Verification<'a> {
    pub(crate) client: &'a WalletPayClient,
}

impl<'a> Verification<'a> {
    /// Verify a crypto payment by transaction id.
    ///
    /// Known soft failures (empty body, rejected key, unknown id) come back as
    /// `Ok` with `status == Error`. Transport and remote failures are returned
    /// as [`PaymentVerificationError`].
    pub async fn verify(&self, transaction_id: &str) -> Result<VerifyResult, PaymentVerificationError> {
        if transaction_id.trim().is_empty() {
            return Err(PaymentVerificationError::new("transaction id cannot be empty"));
        }

        let request = VerifyPaymentRequest {
            transaction_id: transaction_id.to_string(),
        };
        let body: Value = self
            .client
            .http
            .post(&verify_endpoint(transaction_id), &request)
            .await?;

        Ok(VerifyResult::from_body(body))
    }
}
