//! Prometheus metrics

use crate::signal::Signal;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Rate API round trip
    PriceFetch,
    /// Band computation and classification
    Classification,
    /// Notification delivery
    Notification,
}

impl LatencyMetric {
    pub fn name(&self) -> &'static str {
        match self {
            LatencyMetric::PriceFetch => "bandwatch_price_fetch_latency_ms",
            LatencyMetric::Classification => "bandwatch_classification_latency_ms",
            LatencyMetric::Notification => "bandwatch_notification_latency_ms",
        }
    }
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Most recent fetched rate
    LastPrice,
    /// Latest inner band width
    InnerBandWidth,
    /// Samples held in the history buffer
    HistoryLength,
}

impl GaugeMetric {
    pub fn name(&self) -> &'static str {
        match self {
            GaugeMetric::LastPrice => "bandwatch_last_price",
            GaugeMetric::InnerBandWidth => "bandwatch_inner_band_width",
            GaugeMetric::HistoryLength => "bandwatch_history_length",
        }
    }
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Poll iterations
    Ticks,
    /// Failed rate fetches
    FetchFailures,
    /// Failed notification deliveries
    NotificationFailures,
}

impl CounterMetric {
    pub fn name(&self) -> &'static str {
        match self {
            CounterMetric::Ticks => "bandwatch_ticks_total",
            CounterMetric::FetchFailures => "bandwatch_fetch_failures_total",
            CounterMetric::NotificationFailures => "bandwatch_notification_failures_total",
        }
    }
}

/// Start the Prometheus scrape endpoint on all interfaces
pub fn init_metrics_exporter(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;

    tracing::info!(%addr, "Prometheus exporter listening");
    Ok(())
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    metrics::histogram!(metric.name()).record(duration.as_secs_f64() * 1000.0);
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    metrics::gauge!(metric.name()).set(value);
}

/// Increment a counter by one
pub fn increment_counter(metric: CounterMetric) {
    metrics::counter!(metric.name()).increment(1);
}

/// Count an emitted entry signal, labelled by side
pub fn record_signal(signal: Signal) {
    metrics::counter!("bandwatch_signals_total", "side" => signal.as_str()).increment(1);
}
