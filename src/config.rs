//! Configuration types for bandwatch

use crate::signal::{
    SignalParams, DEFAULT_BUY_ZONE_SCALE, DEFAULT_EXPANSION_RATIO, DEFAULT_LOOKBACK,
    DEFAULT_PERIOD, DEFAULT_SELL_ZONE_SCALE,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the exchangerate-api key
pub const API_KEY_ENV: &str = "EXCHANGERATE_API_KEY";
/// Environment variable holding the Telegram bot token
pub const TELEGRAM_TOKEN_ENV: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the Telegram chat id
pub const TELEGRAM_CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

const REDACTED: &str = "***";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// Config file is not valid TOML for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is outside its allowed range
    #[error("Invalid {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
    /// No API key in the file or environment
    #[error("Missing API key: set feed.api_key or EXCHANGERATE_API_KEY")]
    MissingApiKey,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub monitor: MonitorConfig,
    #[serde(default)]
    pub strategy: StrategyConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Exchange rate source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Currency being priced
    #[serde(default = "default_base_currency")]
    pub base_currency: String,

    /// Currency the rate is quoted in
    #[serde(default = "default_quote_currency")]
    pub quote_currency: String,

    /// API key (prefer the environment variable)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://v6.exchangerate-api.com".to_string()
}
fn default_base_currency() -> String {
    "USD".to_string()
}
fn default_quote_currency() -> String {
    "JPY".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            base_currency: default_base_currency(),
            quote_currency: default_quote_currency(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Polling loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Delay between polls, also used after a failed fetch (seconds)
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Number of samples kept in memory
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_poll_interval_secs() -> u64 {
    60
}
fn default_history_capacity() -> usize {
    crate::history::DEFAULT_HISTORY_CAPACITY
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            history_capacity: default_history_capacity(),
        }
    }
}

/// Band strategy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Band window length
    #[serde(default = "default_period")]
    pub period: usize,

    /// Candidate steps scanned for a width jump
    #[serde(default = "default_lookback")]
    pub lookback: usize,

    /// Width growth ratio that qualifies as a jump
    #[serde(default = "default_expansion_ratio")]
    pub expansion_ratio: f64,

    /// BUY zone divisor
    #[serde(default = "default_buy_zone_scale")]
    pub buy_zone_scale: f64,

    /// SELL zone divisor
    #[serde(default = "default_sell_zone_scale")]
    pub sell_zone_scale: f64,
}

fn default_period() -> usize {
    DEFAULT_PERIOD
}
fn default_lookback() -> usize {
    DEFAULT_LOOKBACK
}
fn default_expansion_ratio() -> f64 {
    DEFAULT_EXPANSION_RATIO
}
fn default_buy_zone_scale() -> f64 {
    DEFAULT_BUY_ZONE_SCALE
}
fn default_sell_zone_scale() -> f64 {
    DEFAULT_SELL_ZONE_SCALE
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            lookback: DEFAULT_LOOKBACK,
            expansion_ratio: DEFAULT_EXPANSION_RATIO,
            buy_zone_scale: DEFAULT_BUY_ZONE_SCALE,
            sell_zone_scale: DEFAULT_SELL_ZONE_SCALE,
        }
    }
}

impl From<&StrategyConfig> for SignalParams {
    fn from(config: &StrategyConfig) -> Self {
        Self {
            period: config.period,
            lookback: config.lookback,
            expansion_ratio: config.expansion_ratio,
            buy_zone_scale: config.buy_zone_scale,
            sell_zone_scale: config.sell_zone_scale,
        }
    }
}

/// Notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Telegram Bot API base URL
    #[serde(default = "default_telegram_api_url")]
    pub telegram_api_url: String,

    /// Bot token (prefer the environment variable)
    #[serde(default)]
    pub telegram_bot_token: Option<String>,

    /// Destination chat
    #[serde(default)]
    pub telegram_chat_id: Option<String>,
}

fn default_telegram_api_url() -> String {
    "https://api.telegram.org".to_string()
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            telegram_api_url: default_telegram_api_url(),
            telegram_bot_token: None,
            telegram_chat_id: None,
        }
    }
}

impl NotifyConfig {
    /// Token and chat id, if both are set
    pub fn telegram_credentials(&self) -> Option<(&str, &str)> {
        match (&self.telegram_bot_token, &self.telegram_chat_id) {
            (Some(token), Some(chat_id)) if !token.is_empty() && !chat_id.is_empty() => {
                Some((token.as_str(), chat_id.as_str()))
            }
            _ => None,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Default log filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormatConfig,

    /// Prometheus exporter port (disabled when unset)
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormatConfig::default(),
            metrics_port: None,
        }
    }
}

/// Log output format setting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormatConfig {
    #[default]
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Override secrets from the process environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override secrets using the given lookup; empty values are ignored
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = get(API_KEY_ENV) {
            self.feed.api_key = Some(key);
        }
        if let Some(token) = get(TELEGRAM_TOKEN_ENV) {
            self.notify.telegram_bot_token = Some(token);
        }
        if let Some(chat_id) = get(TELEGRAM_CHAT_ID_ENV) {
            self.notify.telegram_chat_id = Some(chat_id);
        }
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let strategy = &self.strategy;

        if strategy.period < 2 {
            return Err(invalid("strategy.period", "must be at least 2"));
        }
        if strategy.lookback == 0 {
            return Err(invalid("strategy.lookback", "must be at least 1"));
        }
        if !(strategy.expansion_ratio.is_finite() && strategy.expansion_ratio > 0.0) {
            return Err(invalid("strategy.expansion_ratio", "must be positive"));
        }
        if !(strategy.buy_zone_scale.is_finite() && strategy.buy_zone_scale > 0.0) {
            return Err(invalid("strategy.buy_zone_scale", "must be positive"));
        }
        if !(strategy.sell_zone_scale.is_finite() && strategy.sell_zone_scale > 0.0) {
            return Err(invalid("strategy.sell_zone_scale", "must be positive"));
        }
        if self.monitor.poll_interval_secs == 0 {
            return Err(invalid("monitor.poll_interval_secs", "must be positive"));
        }
        if self.monitor.history_capacity < strategy.period {
            return Err(ConfigError::Invalid {
                field: "monitor.history_capacity",
                reason: format!("must be at least strategy.period ({})", strategy.period),
            });
        }
        if self.feed.timeout_secs == 0 {
            return Err(invalid("feed.timeout_secs", "must be positive"));
        }

        Ok(())
    }

    /// API key, required before talking to the rate source
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.feed
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }

    /// Copy with secrets masked, for display
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.feed.api_key.is_some() {
            config.feed.api_key = Some(REDACTED.to_string());
        }
        if config.notify.telegram_bot_token.is_some() {
            config.notify.telegram_bot_token = Some(REDACTED.to_string());
        }
        config
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
