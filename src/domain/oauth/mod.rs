//! OAuth: third-party app registration, authorization code flow, tokens.
//!
//! Wire keys follow OAuth 2.0 naming (`client_id`, `redirect_uri`, `grant_type`, ...).

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};

use crate::error::SdkError;
use crate::shared::query_pairs;

pub const REGISTER_PATH: &str = "/api/v1/oauth/register";
pub const AUTHORIZE_PATH: &str = "/api/v1/oauth/authorize";
pub const TOKEN_PATH: &str = "/api/v1/oauth/token";
pub const USERINFO_PATH: &str = "/api/v1/oauth/userinfo";
pub const APPINFO_PATH: &str = "/api/v1/oauth/appinfo";
pub const REVOKE_PATH: &str = "/api/v1/oauth/revoke";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterAppRequest {
    pub name: String,
    pub redirect_uris: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

/// Parameters of the authorization request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeParams {
    pub client_id: String,
    pub redirect_uri: String,
    pub response_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl AuthorizeParams {
    /// Authorization code flow (`response_type=code`).
    pub fn code(client_id: impl Into<String>, redirect_uri: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            response_type: "code".to_string(),
            scope: None,
            state: None,
        }
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    AuthorizationCode,
    RefreshToken,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRequest {
    pub grant_type: GrantType,
    pub client_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl TokenRequest {
    /// Exchange an authorization code for tokens.
    pub fn authorization_code(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        code: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            grant_type: GrantType::AuthorizationCode,
            client_id: client_id.into(),
            client_secret: Some(client_secret.into()),
            code: Some(code.into()),
            redirect_uri: Some(redirect_uri.into()),
            refresh_token: None,
        }
    }

    /// Trade a refresh token for a new access token.
    pub fn refresh(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            grant_type: GrantType::RefreshToken,
            client_id: client_id.into(),
            client_secret: Some(client_secret.into()),
            code: None,
            redirect_uri: None,
            refresh_token: Some(refresh_token.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeTokenRequest {
    pub token: String,
    pub client_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type_hint: Option<String>,
}

/// Browser redirect URL for the authorization step. Performs no I/O.
pub fn authorization_url(base_url: &str, params: &AuthorizeParams) -> Result<String, SdkError> {
    let value = serde_json::to_value(params)?;
    let query = query_pairs(&value)
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    Ok(format!(
        "{}{}?{}",
        base_url.trim_end_matches('/'),
        AUTHORIZE_PATH,
        query
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_url() {
        let params = AuthorizeParams::code("app_1", "https://example.com/cb?x=1")
            .scope("profile wallet")
            .state("s1");
        let url = authorization_url("https://api.walletpay.co/", &params).unwrap();
        assert_eq!(
            url,
            "https://api.walletpay.co/api/v1/oauth/authorize?client_id=app_1\
             &redirect_uri=https%3A%2F%2Fexample.com%2Fcb%3Fx%3D1\
             &response_type=code&scope=profile%20wallet&state=s1"
        );
    }

    #[test]
    fn test_token_request_authorization_code() {
        let req = TokenRequest::authorization_code("app_1", "secret", "abc", "https://example.com/cb");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["grant_type"], "authorization_code");
        assert_eq!(json["code"], "abc");
        assert!(json.get("refresh_token").is_none());
    }

    #[test]
    fn test_token_request_refresh() {
        let req = TokenRequest::refresh("app_1", "secret", "rt");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["grant_type"], "refresh_token");
        assert_eq!(json["refresh_token"], "rt");
        assert!(json.get("code").is_none());
        assert!(json.get("redirect_uri").is_none());
    }

    #[test]
    fn test_register_omits_empty_scopes() {
        let req = RegisterAppRequest {
            name: "Shop".to_string(),
            redirect_uris: vec!["https://shop.example/cb".to_string()],
            description: None,
            website: None,
            scopes: vec![],
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"name":"Shop","redirect_uris":["https://shop.example/cb"]}"#
        );
    }
}
