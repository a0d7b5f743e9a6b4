//! End-to-end integration tests

use super::expanding_closes;
use async_trait::async_trait;
use bandwatch::config::Config;
use bandwatch::feed::{ExchangeRateClient, ExchangeRateConfig, FeedError, PriceSource};
use bandwatch::monitor::{Monitor, TickOutcome};
use bandwatch::notify::{self, LogNotifier, TelegramNotifier};
use bandwatch::signal::{Signal, SignalParams};
use mockito::Matcher;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Serves a fixed sequence of rates, then fails
struct SequenceSource {
    prices: Mutex<VecDeque<f64>>,
}

impl SequenceSource {
    fn new(prices: Vec<f64>) -> Self {
        Self {
            prices: Mutex::new(prices.into()),
        }
    }
}

#[async_trait]
impl PriceSource for SequenceSource {
    async fn fetch_price(&self) -> Result<f64, FeedError> {
        let next = self.prices.lock().map(|mut p| p.pop_front()).ok().flatten();
        next.ok_or(FeedError::MissingRate)
    }

    fn pair(&self) -> String {
        "USD/JPY".to_string()
    }
}

#[test]
fn test_example_config_loads() {
    let config = Config::load(concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml.example")).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.feed.base_currency, "USD");
    assert_eq!(config.feed.quote_currency, "JPY");
    assert_eq!(SignalParams::from(&config.strategy), SignalParams::default());
}

#[tokio::test]
async fn test_monitor_polls_http_feed() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/v6/e2e-key/pair/USD/JPY")
        .with_status(200)
        .with_body(r#"{"result":"success","conversion_rate":150.125}"#)
        .expect(3)
        .create_async()
        .await;

    let toml = format!(
        "[feed]\nbase_url = \"{}\"\napi_key = \"e2e-key\"\n\n[monitor]\npoll_interval_secs = 1\n",
        server.url()
    );
    let config = Config::from_toml(&toml).unwrap();
    config.validate().unwrap();

    let api_key = config.require_api_key().unwrap();
    let source =
        ExchangeRateClient::new(ExchangeRateConfig::from_feed(&config.feed, api_key)).unwrap();
    let mut monitor = Monitor::new(
        source,
        LogNotifier,
        SignalParams::from(&config.strategy),
        config.monitor.history_capacity,
        Duration::from_secs(config.monitor.poll_interval_secs),
    );

    for _ in 0..3 {
        assert!(matches!(
            monitor.tick().await,
            TickOutcome::NoSignal { price } if price == 150.125
        ));
    }

    assert_eq!(monitor.history().closes(), vec![150.125; 3]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_monitor_skips_failed_http_fetch() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/v6/e2e-key/pair/USD/JPY")
        .with_status(500)
        .create_async()
        .await;

    let source = ExchangeRateClient::new(
        ExchangeRateConfig::new("e2e-key").base_url(server.url()),
    )
    .unwrap();
    let mut monitor = Monitor::new(
        source,
        LogNotifier,
        SignalParams::default(),
        200,
        Duration::from_secs(60),
    );

    assert!(matches!(monitor.tick().await, TickOutcome::FetchFailed));
    assert!(monitor.history().is_empty());
    assert_eq!(monitor.stats().fetch_failures, 1);
}

#[tokio::test]
async fn test_buy_signal_reaches_telegram() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/bottoken/sendMessage")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("chat_id".into(), "42".into()),
            Matcher::Regex("ENTRY\\+SIGNAL%3A\\+BUY\\+at\\+141.000".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"ok":true}"#)
        .expect(1)
        .create_async()
        .await;

    // Warm-up swing without its last step, then a close inside the lower zone
    let mut prices: Vec<f64> = expanding_closes().into_iter().take(29).collect();
    prices.push(141.0);

    let notifier = TelegramNotifier::new(server.url(), "token", "42").unwrap();
    let mut monitor = Monitor::new(
        SequenceSource::new(prices),
        notifier,
        SignalParams::default(),
        200,
        Duration::from_secs(60),
    );

    let mut signals = Vec::new();
    for _ in 0..30 {
        if let TickOutcome::Signalled(event) = monitor.tick().await {
            signals.push(event);
        }
    }

    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].signal, Signal::Buy);
    assert!(signals[0].delivered);
    assert_eq!(monitor.stats().signals, 1);
    assert_eq!(monitor.stats().notification_failures, 0);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_notifier_from_config_falls_back_to_log() {
    let config = Config::from_toml("[notify]\ntelegram_chat_id = \"42\"\n").unwrap();
    let notifier = notify::from_config(&config.notify).unwrap();
    assert!(notifier.notify("hello").await.is_ok());
}
