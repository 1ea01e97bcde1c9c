// In crates/analytics/src/types.rs

use rust_decimal::Decimal;
use serde::Serialize;

/// Key figures shown next to the price chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSummary {
    pub last_close: Decimal,
    /// The second-to-last close, or `last_close` for a single-point series.
    pub prev_close: Decimal,
    pub change: Decimal,
    /// Percentage change versus `prev_close`; zero when `prev_close` is zero.
    pub change_pct: f64,
    /// Trailing short-window mean; `None` when the series is too short.
    pub ma_short: Option<Decimal>,
    /// Trailing long-window mean; `None` when the series is too short.
    pub ma_long: Option<Decimal>,
    pub short_window: usize,
    pub long_window: usize,
}
