// In crates/engine/src/types.rs

use analytics::PriceSummary;
use core_types::{Interval, Period, PriceBar, PriceSeries, Signal};
use rust_decimal::Decimal;
use serde::Serialize;

/// Everything the chart view needs for one request.
#[derive(Debug, Clone, Serialize)]
pub struct ChartReport {
    /// Upper-cased ticker for headings.
    pub display_name: String,
    pub period: Period,
    pub interval: Interval,
    /// The full series, for the line chart.
    pub series: PriceSeries,
    pub summary: PriceSummary,
    /// The most recent bars, for the raw-data table.
    pub recent: Vec<PriceBar>,
}

/// The momentum panel result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalReport {
    pub display_name: String,
    pub signal: Signal,
    pub label: &'static str,
    pub short_avg: Decimal,
    pub long_avg: Decimal,
    pub short_window: usize,
    pub long_window: usize,
    pub observations: usize,
}
