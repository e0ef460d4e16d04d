//! Low-level HTTP client: `WalletPayHttp`.
//!
//! Every platform call goes through [`WalletPayHttp::request`]: build the URL,
//! sign the payload into headers, dispatch, and fold any failure into an
//! [`HttpError`] whose message reads `API Request Failed: ...`. The sub-clients
//! in `domain/` are thin wrappers over it.

use crate::auth::headers::{build_headers, SignedHeaders, HEADER_SECRET_KEY, HEADER_SIGNATURE};
use crate::config::ClientConfig;
use crate::error::{HttpError, SdkError};
use crate::error_message::extract_message;
use crate::shared::{is_truthy, query_pairs};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Empty payload for calls that take no parameters. Serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoParams {}

/// Low-level HTTP client for the platform REST API.
#[derive(Clone)]
pub struct WalletPayHttp {
    config: ClientConfig,
    client: Client,
}

impl WalletPayHttp {
    /// Create a client with a default `reqwest::Client`.
    ///
    /// No timeout is configured; supply your own client through
    /// [`WalletPayHttp::with_client`] to add one.
    pub fn new(config: ClientConfig) -> Result<Self, HttpError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(config, client))
    }

    pub fn with_client(config: ClientConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send an authenticated request and deserialize the response body.
    ///
    /// `GET` sends `payload` as query parameters with an empty body; every other
    /// method sends it as the JSON body. Ask for `serde_json::Value` to get the
    /// body back untouched.
    pub async fn request<T, P>(&self, method: Method, endpoint: &str, payload: &P) -> Result<T, SdkError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let body = self.request_value(method, endpoint, payload).await?;
        serde_json::from_value(body)
            .map_err(|e| HttpError::Deserialize(format!("Failed to deserialize response: {}", e)).into())
    }

    /// Send an authenticated request and return the decoded body as-is.
    pub async fn request_value<P>(&self, method: Method, endpoint: &str, payload: &P) -> Result<Value, SdkError>
    where
        P: Serialize + ?Sized,
    {
        // The same value is signed and transmitted, so the bytes always agree.
        let payload = serde_json::to_value(payload)?;
        let headers = build_headers(&self.config, &payload)?;
        let url = format!("{}{}", self.config.base_url(), endpoint);

        let mode = if headers.is_signed() { "signed" } else { "public" };
        tracing::debug!(method = %method, endpoint, mode, "Dispatching request");

        let mut req = self
            .client
            .request(method.clone(), &url)
            .headers(to_header_map(&headers)?);

        if method == Method::GET {
            let params = query_pairs(&payload);
            if !params.is_empty() {
                req = req.query(&params);
            }
        } else {
            req = req.body(payload.to_string());
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(method = %method, endpoint, error = %e, "Request failed before a response arrived");
                return Err(HttpError::from(e).into());
            }
        };

        let status = resp.status();
        let text = resp.text().await.map_err(HttpError::from)?;
        let body = decode_body(&text);

        if !status.is_success() {
            let message = if is_truthy(&body) {
                extract_message(&body)
            } else {
                format!("Request failed with status code {}", status.as_u16())
            };
            tracing::warn!(method = %method, endpoint, status = status.as_u16(), %message, "Request rejected");
            return Err(HttpError::Remote {
                status: status.as_u16(),
                message,
                body,
            }
            .into());
        }

        if body.get("success").and_then(Value::as_bool) == Some(false) {
            let message = extract_message(&body);
            tracing::warn!(method = %method, endpoint, status = status.as_u16(), %message, "Request reported success=false");
            return Err(HttpError::Remote {
                status: status.as_u16(),
                message,
                body,
            }
            .into());
        }

        tracing::debug!(method = %method, endpoint, status = status.as_u16(), "Request succeeded");
        Ok(body)
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get<T, P>(&self, endpoint: &str, params: &P) -> Result<T, SdkError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(Method::GET, endpoint, params).await
    }

    pub(crate) async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T, SdkError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, body).await
    }
}

impl std::fmt::Debug for WalletPayHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletPayHttp")
            .field("config", &self.config)
            .finish()
    }
}

fn to_header_map(headers: &SignedHeaders) -> Result<HeaderMap, HttpError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers.iter() {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| HttpError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        let mut header_value = HeaderValue::from_str(value).map_err(|e| HttpError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        if name == HEADER_SECRET_KEY || name == HEADER_SIGNATURE {
            header_value.set_sensitive(true);
        }
        map.insert(header_name, header_value);
    }
    Ok(map)
}

/// Empty → `null`, JSON when it parses, otherwise the raw text as a string.
fn decode_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}
