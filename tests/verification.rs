//! Payment verification against a mock server.

use serde_json::json;
use walletpay_sdk::domain::verification::{ACCESS_DENIED, EMPTY_RESPONSE_MESSAGE, INVALID_PAYMENT_ID};
use walletpay_sdk::prelude::*;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VERIFY_PATH: &str = "/api/v1/pay/crypto/payment/tx_1";

fn client(server: &MockServer) -> WalletPayClient {
    WalletPayClient::builder()
        .public_key("pk_test_123")
        .secret_key("LIVE;SK;tok123")
        .base_url(&server.uri())
        .build()
        .unwrap()
}

async fn mount(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(VERIFY_PATH))
        .and(body_json(json!({"transactionId": "tx_1"})))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_verify_success_returns_body_as_data() {
    let server = MockServer::start().await;
    let body = json!({"status": "paid", "amount": "10.00", "symbol": "USDT"});
    mount(&server, ResponseTemplate::new(200).set_body_json(body.clone())).await;

    let result = client(&server).verification().verify("tx_1").await.unwrap();
    assert!(result.is_success());
    assert_eq!(result.data, Some(body));
    assert!(result.message.is_none());
}

#[tokio::test]
async fn test_verify_empty_body() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200)).await;

    let result = client(&server).verification().verify("tx_1").await.unwrap();
    assert_eq!(result.status, VerifyStatus::Error);
    assert!(result.data.is_none());
    assert_eq!(result.message.as_deref(), Some(EMPTY_RESPONSE_MESSAGE));
}

#[tokio::test]
async fn test_verify_access_denied() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_string(ACCESS_DENIED)).await;

    let result = client(&server).verification().verify("tx_1").await.unwrap();
    assert_eq!(result.status, VerifyStatus::Error);
    assert!(result.data.is_none());
    assert_eq!(result.message.as_deref(), Some(ACCESS_DENIED));
}

#[tokio::test]
async fn test_verify_invalid_payment_id() {
    let server = MockServer::start().await;
    mount(&server, ResponseTemplate::new(200).set_body_string(INVALID_PAYMENT_ID)).await;

    let result = client(&server).verification().verify("tx_1").await.unwrap();
    assert_eq!(result.status, VerifyStatus::Error);
    assert!(result.data.is_none());
    assert!(result.message.is_none());
}

#[tokio::test]
async fn test_verify_remote_failure_is_verification_error() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(500).set_body_json(json!({"message": "upstream down"})),
    )
    .await;

    let err = client(&server)
        .verification()
        .verify("tx_1")
        .await
        .unwrap_err();
    assert_eq!(err.status(), "error");
    assert_eq!(err.data(), &json!({}));
    assert_eq!(err.message(), "API Request Failed: upstream down");
}

#[tokio::test]
async fn test_verify_success_false_is_verification_error() {
    let server = MockServer::start().await;
    mount(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"success": false, "message": "not found"})),
    )
    .await;

    let err = client(&server)
        .verification()
        .verify("tx_1")
        .await
        .unwrap_err();
    assert_eq!(err.message(), "API Request Failed: not found");
}

#[tokio::test]
async fn test_verify_empty_id_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server).verification().verify("  ").await.unwrap_err();
    assert_eq!(err.status(), "error");
}
