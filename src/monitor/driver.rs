//! Polling loop
//!
//! Fetches a rate every poll interval, appends it to the history buffer,
//! classifies it and forwards entry signals to the notifier. A failed fetch
//! skips the tick and waits the same interval before retrying.

use super::types::{MonitorStats, SignalEvent, TickOutcome};
use crate::bands::compute_bands;
use crate::feed::PriceSource;
use crate::history::{PriceHistory, PriceSample};
use crate::notify::{format_entry_message, Notifier};
use crate::signal::{SignalClassifier, SignalParams};
use crate::telemetry::{self, CounterMetric, GaugeMetric, LatencyMetric};
use chrono::{DateTime, Utc};
use std::future::Future;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Owns the price history and drives one classification per poll
pub struct Monitor<S: PriceSource, N: Notifier> {
    source: S,
    notifier: N,
    classifier: SignalClassifier,
    history: PriceHistory,
    poll_interval: Duration,
    stats: MonitorStats,
}

impl<S: PriceSource, N: Notifier> Monitor<S, N> {
    /// Create a monitor
    pub fn new(
        source: S,
        notifier: N,
        params: SignalParams,
        history_capacity: usize,
        poll_interval: Duration,
    ) -> Self {
        Self {
            source,
            notifier,
            classifier: SignalClassifier::new(params),
            history: PriceHistory::new(history_capacity),
            poll_interval,
            stats: MonitorStats::default(),
        }
    }

    /// Price history collected so far
    pub fn history(&self) -> &PriceHistory {
        &self.history
    }

    /// Counters for this run
    pub fn stats(&self) -> MonitorStats {
        self.stats
    }

    /// Delay between polls
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Run one poll iteration stamped with the current time
    pub async fn tick(&mut self) -> TickOutcome {
        self.tick_at(Utc::now()).await
    }

    /// Run one poll iteration with the sample stamped at `now`
    pub async fn tick_at(&mut self, now: DateTime<Utc>) -> TickOutcome {
        self.stats.ticks += 1;
        telemetry::increment_counter(CounterMetric::Ticks);

        let started = Instant::now();
        let price = match self.source.fetch_price().await {
            Ok(price) => price,
            Err(e) => {
                tracing::warn!(error = %e, pair = %self.source.pair(), "Price fetch failed");
                self.stats.fetch_failures += 1;
                telemetry::increment_counter(CounterMetric::FetchFailures);
                return TickOutcome::FetchFailed;
            }
        };
        telemetry::record_latency(LatencyMetric::PriceFetch, started.elapsed());

        tracing::info!(pair = %self.source.pair(), price, "Current price");

        self.history.push(PriceSample::new(now, price));
        telemetry::set_gauge(GaugeMetric::LastPrice, price);
        telemetry::set_gauge(GaugeMetric::HistoryLength, self.history.len() as f64);

        let snapshot = self.history.snapshot();
        let started = Instant::now();
        let signal = self.classifier.classify(&snapshot, price);
        telemetry::record_latency(LatencyMetric::Classification, started.elapsed());

        if let Some(bands) = compute_bands(&snapshot, self.classifier.params().period).latest() {
            telemetry::set_gauge(GaugeMetric::InnerBandWidth, bands.inner_width());
            tracing::debug!(
                upper_outer = bands.upper_outer,
                upper_inner = bands.upper_inner,
                lower_inner = bands.lower_inner,
                lower_outer = bands.lower_outer,
                "Bands"
            );
        }

        if !signal.is_entry() {
            return TickOutcome::NoSignal { price };
        }

        let message = format_entry_message(signal, price, now);
        tracing::info!(%signal, price, "{}", message);
        self.stats.signals += 1;
        telemetry::record_signal(signal);

        let started = Instant::now();
        let delivered = match self.notifier.notify(&message).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Notification failed");
                self.stats.notification_failures += 1;
                telemetry::increment_counter(CounterMetric::NotificationFailures);
                false
            }
        };
        telemetry::record_latency(LatencyMetric::Notification, started.elapsed());

        TickOutcome::Signalled(SignalEvent {
            id: Uuid::new_v4(),
            signal,
            price,
            timestamp: now,
            message,
            delivered,
        })
    }

    /// Poll until `shutdown` resolves
    pub async fn run<F>(&mut self, shutdown: F) -> MonitorStats
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        tracing::info!(
            pair = %self.source.pair(),
            interval_secs = self.poll_interval.as_secs(),
            capacity = self.history.capacity(),
            "Monitor started"
        );

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = self.tick() => {}
            }

            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
        }

        tracing::info!(
            ticks = self.stats.ticks,
            fetch_failures = self.stats.fetch_failures,
            signals = self.stats.signals,
            notification_failures = self.stats.notification_failures,
            "Monitor stopped"
        );

        self.stats
    }
}
