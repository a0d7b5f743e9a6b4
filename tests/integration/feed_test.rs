//! Integration tests for the exchange rate feed

use bandwatch::feed::{ExchangeRateClient, ExchangeRateConfig, FeedError, PriceSource};
use std::time::Duration;

const PAIR_PATH: &str = "/v6/test-key/pair/USD/JPY";

fn client(base_url: &str) -> ExchangeRateClient {
    let config = ExchangeRateConfig::new("test-key")
        .base_url(base_url)
        .timeout(Duration::from_secs(2));
    ExchangeRateClient::new(config).unwrap()
}

#[tokio::test]
async fn test_fetch_price_success() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", PAIR_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"result":"success","base_code":"USD","target_code":"JPY","conversion_rate":151.4321}"#,
        )
        .create_async()
        .await;

    let price = client(&server.url()).fetch_price().await.unwrap();

    assert_eq!(price, 151.4321);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_price_custom_pair() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v6/test-key/pair/EUR/USD")
        .with_status(200)
        .with_body(r#"{"result":"success","conversion_rate":1.0842}"#)
        .create_async()
        .await;

    let config = ExchangeRateConfig::new("test-key")
        .base_url(server.url())
        .pair("EUR", "USD");
    let source = ExchangeRateClient::new(config).unwrap();

    assert_eq!(source.pair(), "EUR/USD");
    assert_eq!(source.fetch_price().await.unwrap(), 1.0842);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_price_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", PAIR_PATH)
        .with_status(403)
        .with_body(r#"{"result":"error","error-type":"invalid-key"}"#)
        .create_async()
        .await;

    let err = client(&server.url()).fetch_price().await.unwrap_err();
    assert!(matches!(err, FeedError::Api(ref t) if t == "invalid-key"));
}

#[tokio::test]
async fn test_fetch_price_error_result_with_ok_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", PAIR_PATH)
        .with_status(200)
        .with_body(r#"{"result":"error","error-type":"unsupported-code"}"#)
        .create_async()
        .await;

    let err = client(&server.url()).fetch_price().await.unwrap_err();
    assert!(matches!(err, FeedError::Api(ref t) if t == "unsupported-code"));
}

#[tokio::test]
async fn test_fetch_price_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", PAIR_PATH)
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let err = client(&server.url()).fetch_price().await.unwrap_err();
    assert!(matches!(err, FeedError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_fetch_price_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", PAIR_PATH)
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let err = client(&server.url()).fetch_price().await.unwrap_err();
    assert!(matches!(err, FeedError::Parse(_)));
}

#[tokio::test]
async fn test_fetch_price_connection_refused_hides_key() {
    // Nothing listens on port 9 locally
    let err = client("http://127.0.0.1:9").fetch_price().await.unwrap_err();
    assert!(matches!(err, FeedError::Http(_)));
    assert!(!err.to_string().contains("test-key"));
}
