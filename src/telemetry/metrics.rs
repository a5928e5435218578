//! Prometheus metrics

use crate::metadata::Band;
use crate::trend::{TrendState, PRICE_SCALE};

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Latest committed price in whole USD
    LatestPrice,
    /// Current signed trend counter
    Trend,
    /// Projected band index
    Band,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Gated updates that committed
    UpkeepPerformed,
    /// Polls that landed on an already-checked day
    UpkeepSkipped,
    /// Oracle reads that failed
    OracleErrors,
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    let name = match metric {
        GaugeMetric::LatestPrice => "trend_tracker_latest_price_usd",
        GaugeMetric::Trend => "trend_tracker_trend",
        GaugeMetric::Band => "trend_tracker_band",
    };
    metrics::gauge!(name).set(value);
}

/// Increment a counter
pub fn increment(metric: CounterMetric) {
    let name = match metric {
        CounterMetric::UpkeepPerformed => "trend_tracker_upkeep_performed_total",
        CounterMetric::UpkeepSkipped => "trend_tracker_upkeep_skipped_total",
        CounterMetric::OracleErrors => "trend_tracker_oracle_errors_total",
    };
    metrics::counter!(name).increment(1);
}

/// Publish the gauges for a freshly committed state.
pub fn observe_state(state: &TrendState, band: Band) {
    set_gauge(
        GaugeMetric::LatestPrice,
        state.latest_price as f64 / PRICE_SCALE as f64,
    );
    set_gauge(GaugeMetric::Trend, state.trend as f64);
    set_gauge(GaugeMetric::Band, band.index() as f64);
}
