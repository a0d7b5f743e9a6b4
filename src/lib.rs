//! bandwatch: exchange-rate monitor that alerts on Bollinger band expansion
//!
//! This library provides the core components for:
//! - Bounded in-memory price history
//! - Rolling ±2σ/±3σ band calculation
//! - Band expansion detection and BUY/SELL entry classification
//! - Exchange rate polling from exchangerate-api.com
//! - Telegram notifications
//! - The polling monitor that ties them together
//! - Logging and Prometheus metrics

pub mod bands;
pub mod cli;
pub mod config;
pub mod feed;
pub mod history;
pub mod monitor;
pub mod notify;
pub mod signal;
pub mod telemetry;
