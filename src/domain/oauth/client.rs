//! OAuth sub-client: app registration, authorization, token lifecycle.

use serde::Serialize;
use serde_json::Value;

use crate::client::WalletPayClient;
use crate::domain::oauth::{
    authorization_url, AuthorizeParams, RegisterAppRequest, RevokeTokenRequest, TokenRequest,
    APPINFO_PATH, AUTHORIZE_PATH, REGISTER_PATH, REVOKE_PATH, TOKEN_PATH, USERINFO_PATH,
};
use crate::error::SdkError;

#[derive(Serialize)]
struct AccessTokenParams<'a> {
    access_token: &'a str,
}

#[derive(Serialize)]
struct ClientIdParams<'a> {
    client_id: &'a str,
}

pub struct OAuth<'a> {
    pub(crate) client: &'a WalletPayClient,
}

impl<'a> OAuth<'a> {
    pub async fn register(&self, request: &RegisterAppRequest) -> Result<Value, SdkError> {
        if request.redirect_uris.is_empty() {
            return Err(SdkError::Validation(
                "at least one redirect URI is required".to_string(),
            ));
        }
        self.client.http.post(REGISTER_PATH, request).await
    }

    /// Server-side authorization call. Browser flows usually redirect to
    /// [`OAuth::authorization_url`] instead.
    pub async fn authorize(&self, params: &AuthorizeParams) -> Result<Value, SdkError> {
        self.client.http.get(AUTHORIZE_PATH, params).await
    }

    pub fn authorization_url(&self, params: &AuthorizeParams) -> Result<String, SdkError> {
        authorization_url(self.client.base_url(), params)
    }

    pub async fn token(&self, request: &TokenRequest) -> Result<Value, SdkError> {
        self.client.http.post(TOKEN_PATH, request).await
    }

    pub async fn user_info(&self, access_token: &str) -> Result<Value, SdkError> {
        if access_token.is_empty() {
            return Err(SdkError::Validation("access_token cannot be empty".to_string()));
        }
        self.client
            .http
            .get(USERINFO_PATH, &AccessTokenParams { access_token })
            .await
    }

    pub async fn app_info(&self, client_id: &str) -> Result<Value, SdkError> {
        if client_id.is_empty() {
            return Err(SdkError::Validation("client_id cannot be empty".to_string()));
        }
        self.client
            .http
            .get(APPINFO_PATH, &ClientIdParams { client_id })
            .await
    }

    pub async fn revoke(&self, request: &RevokeTokenRequest) -> Result<Value, SdkError> {
        self.client.http.post(REVOKE_PATH, request).await
    }
}
