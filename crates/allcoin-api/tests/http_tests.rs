/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for dispatch, signing and response handling
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints or error mapping change
*/

mod common;

use allcoin_api::{AllcoinClient, AllcoinError, ClientConfig, Params, RequestSigner, Side};
use common::{client_for, setup_mock_server, test_credentials};
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(AllcoinClient::new(test_credentials()));
    assert_eq!(client.credentials().api_key(), "api_key");
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig::default();
    let _client = assert_ok!(AllcoinClient::with_config(test_credentials(), config));
}

#[test]
fn test_client_rejects_bad_proxy() {
    let mut config = ClientConfig::default();
    config.proxy = Some("http://[::1".to_string());
    let err = assert_err!(AllcoinClient::with_config(test_credentials(), config));
    assert!(matches!(err, AllcoinError::Config(_)));
}

#[tokio::test]
async fn test_invalid_json() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/depth"))
        .and(query_param("symbol", "eth_btc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<head></html>"))
        .mount(&server)
        .await;

    let err = assert_err!(client_for(&server).get_order_book("eth_btc", None, None).await);
    match err {
        AllcoinError::Request(text) => assert!(text.contains("<head></html>")),
        other => panic!("Expected Request error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_exception() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/depth"))
        .and(query_param("symbol", "eth_btc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error_code": "10017",
            "result": false,
        })))
        .mount(&server)
        .await;

    let err = assert_err!(client_for(&server).get_order_book("eth_btc", None, None).await);
    match err {
        AllcoinError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 200);
            assert_eq!(code, "10017");
            assert_eq!(message, "The specified currency does not exist");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_is_api_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/ticker"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "result": true,
        })))
        .mount(&server)
        .await;

    let err = assert_err!(client_for(&server).get_ticker("eth_btc").await);
    match err {
        AllcoinError::Api { status, message, .. } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Unknown Error");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_order_book_default_query() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/depth"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "asks": [],
            "bids": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(client_for(&server).get_order_book("eth_btc", None, None).await);

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "GET");
    assert_eq!(requests[0].url.query(), Some("symbol=eth_btc"));
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_transmitted_signature_roundtrip() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/trade"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "order_id": "123456",
            "result": true,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_ok!(
        client
            .create_order(
                "eth_btc",
                Side::Sell,
                "0.0123".parse().unwrap(),
                "120".parse().unwrap()
            )
            .await
    );

    let requests = server.received_requests().await.expect("recorded requests");
    let mut sent: Params = url::form_urlencoded::parse(&requests[0].body)
        .into_owned()
        .collect();

    let sign = sent.remove("sign").expect("sign must be transmitted");
    let names: Vec<&str> = sent.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["amount", "api_key", "price", "symbol", "type"]);

    let creds = test_credentials();
    assert_eq!(RequestSigner::new(&creds).sign(&sent), sign);
}

#[tokio::test]
async fn test_single_network_call_on_failure() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/userinfo"))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .expect(1)
        .mount(&server)
        .await;

    let err = assert_err!(client_for(&server).get_userinfo().await);
    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("Invalid JSON error message from Allcoin: busy"));
}
