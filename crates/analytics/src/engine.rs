use crate::types::PriceSummary;
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use strategies::indicators::trailing_mean;

/// Computes the descriptive metrics shown alongside a price series.
#[derive(Debug, Clone, Copy)]
pub struct AnalyticsEngine {
    short_window: usize,
    long_window: usize,
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new(20, 60)
    }
}

impl AnalyticsEngine {
    pub fn new(short_window: usize, long_window: usize) -> Self {
        Self {
            short_window,
            long_window,
        }
    }

    /// Calculates the summary for a close-price series (oldest first).
    ///
    /// Returns `None` for an empty series.
    pub fn calculate(&self, closes: &[Decimal]) -> Option<PriceSummary> {
        let last_close = *closes.last()?;

        // 1. Day-over-day change. A single point compares against itself.
        let prev_close = if closes.len() > 1 {
            closes[closes.len() - 2]
        } else {
            last_close
        };
        let change = last_close - prev_close;
        let change_pct = if prev_close.is_zero() {
            0.0
        } else {
            (change / prev_close).to_f64().unwrap_or(0.0) * 100.0
        };

        // 2. Trailing means, only when the window is full.
        let ma_short = trailing_mean(closes, self.short_window);
        let ma_long = trailing_mean(closes, self.long_window);

        Some(PriceSummary {
            last_close,
            prev_close,
            change,
            change_pct,
            ma_short,
            ma_long,
            short_window: self.short_window,
            long_window: self.long_window,
        })
    }
}

/// Summarizes with the default 20/60 windows.
pub fn summarize(closes: &[Decimal]) -> Option<PriceSummary> {
    AnalyticsEngine::default().calculate(closes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_series_has_no_summary() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn single_point_reports_zero_change() {
        let summary = summarize(&[dec!(187.5)]).unwrap();

        assert_eq!(summary.last_close, dec!(187.5));
        assert_eq!(summary.prev_close, dec!(187.5));
        assert_eq!(summary.change, dec!(0));
        assert_eq!(summary.change_pct, 0.0);
        assert_eq!(summary.ma_short, None);
        assert_eq!(summary.ma_long, None);
    }

    #[test]
    fn change_against_previous_close() {
        let summary = summarize(&[dec!(90), dec!(100), dec!(110)]).unwrap();

        assert_eq!(summary.prev_close, dec!(100));
        assert_eq!(summary.change, dec!(10));
        assert!((summary.change_pct - 10.0).abs() < 1e-12);
    }

    #[test]
    fn zero_previous_close_guards_division() {
        let summary = summarize(&[dec!(0), dec!(5)]).unwrap();

        assert_eq!(summary.change, dec!(5));
        assert_eq!(summary.change_pct, 0.0);
    }

    #[test]
    fn moving_averages_need_full_windows() {
        let closes: Vec<Decimal> = (1..=59).map(Decimal::from).collect();
        let summary = summarize(&closes).unwrap();

        // Mean of 40..=59.
        assert_eq!(summary.ma_short, Some(dec!(49.5)));
        assert_eq!(summary.ma_long, None);

        let closes: Vec<Decimal> = (1..=60).map(Decimal::from).collect();
        let summary = summarize(&closes).unwrap();
        assert_eq!(summary.ma_short, Some(dec!(50.5)));
        assert_eq!(summary.ma_long, Some(dec!(30.5)));
    }

    #[test]
    fn nineteen_points_have_no_short_average() {
        let closes = vec![dec!(10); 19];
        assert_eq!(summarize(&closes).unwrap().ma_short, None);
        assert_eq!(summarize(&[dec!(10); 20]).unwrap().ma_short, Some(dec!(10)));
    }

    #[test]
    fn custom_windows() {
        let engine = AnalyticsEngine::new(2, 3);
        let summary = engine.calculate(&[dec!(1), dec!(2), dec!(3)]).unwrap();

        assert_eq!(summary.ma_short, Some(dec!(2.5)));
        assert_eq!(summary.ma_long, Some(dec!(2)));
        assert_eq!(summary.short_window, 2);
        assert_eq!(summary.long_window, 3);
    }
}
