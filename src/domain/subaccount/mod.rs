//! Subaccounts: asset subaccounts under the merchant account.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

pub const CREATE_SUBACCOUNT_PATH: &str = "/api/v1/assets/subaccount/create";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubaccountRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateSubaccountRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            description: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_omitted() {
        let req = CreateSubaccountRequest::new("Savings");
        assert_eq!(serde_json::to_string(&req).unwrap(), r#"{"name":"Savings"}"#);
    }
}
