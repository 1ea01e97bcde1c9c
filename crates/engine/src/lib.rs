// In crates/engine/src/lib.rs

pub mod outcome;
pub mod types;

use analytics::AnalyticsEngine;
use anyhow::Result;
use api_client::PriceLoader;
use app_config::DashboardSettings;
use core_types::{PriceSeries, SeriesKey};
use strategies::{MACrossover, MACrossoverSettings, Strategy};

pub use outcome::Outcome;
pub use types::{ChartReport, SignalReport};

/// Default number of rows in the raw-data table.
pub const TABLE_ROWS: usize = 200;

/// Orchestrates the two user actions: load a chart and compute the momentum signal.
///
/// Both actions go through the injected [`PriceLoader`], so repeated actions on
/// the same `(symbol, period, interval)` are served from its cache.
pub struct Dashboard<L> {
    loader: L,
    strategy: MACrossover,
    analytics: AnalyticsEngine,
    table_rows: usize,
}

impl<L: PriceLoader> Dashboard<L> {
    pub fn new(loader: L, strategy: MACrossover, table_rows: usize) -> Self {
        let windows = strategy.settings();
        let analytics = AnalyticsEngine::new(windows.fast_period, windows.slow_period);
        Self {
            loader,
            strategy,
            analytics,
            table_rows,
        }
    }

    /// Builds a dashboard with the windows and table size from the settings.
    pub fn from_settings(loader: L, settings: &DashboardSettings) -> Result<Self> {
        let strategy = MACrossover::new(MACrossoverSettings {
            fast_period: settings.fast_period,
            slow_period: settings.slow_period,
        })?;
        Ok(Self::new(loader, strategy, settings.table_rows))
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Loads the series and its descriptive metrics.
    pub async fn chart(&self, query: &SeriesKey) -> Outcome<ChartReport> {
        let series = match self.load(query).await {
            Ok(series) => series,
            Err(outcome) => return outcome,
        };

        let Some(summary) = self.analytics.calculate(&series.closes()) else {
            // `load` never hands back an empty series.
            return Outcome::EmptyResult { symbol: query.symbol.display_name() };
        };

        tracing::info!(
            symbol = %query.symbol,
            bars = series.len(),
            last_close = %summary.last_close,
            change_pct = summary.change_pct,
            "Chart data ready."
        );

        Outcome::Ready(ChartReport {
            display_name: query.symbol.display_name(),
            period: query.period,
            interval: query.interval,
            recent: series.tail(self.table_rows).to_vec(),
            series,
            summary,
        })
    }

    /// Loads the series and evaluates the moving-average crossover on its closes.
    pub async fn momentum(&self, query: &SeriesKey) -> Outcome<SignalReport> {
        let series = match self.load(query).await {
            Ok(series) => series,
            Err(outcome) => return outcome,
        };

        let closes = series.closes();
        let Some((short_avg, long_avg)) = self.strategy.averages(&closes) else {
            tracing::info!(
                symbol = %query.symbol,
                observed = closes.len(),
                required = self.strategy.required_history(),
                "Not enough history for a momentum signal."
            );
            return Outcome::InsufficientHistory {
                symbol: query.symbol.display_name(),
                observed: closes.len(),
                required: self.strategy.required_history(),
            };
        };
        let signal = self.strategy.assess(&closes);

        tracing::info!(symbol = %query.symbol, ?signal, %short_avg, %long_avg, "Momentum signal computed.");

        let windows = self.strategy.settings();
        Outcome::Ready(SignalReport {
            display_name: query.symbol.display_name(),
            signal,
            label: signal.label(),
            short_avg,
            long_avg,
            short_window: windows.fast_period,
            long_window: windows.slow_period,
            observations: closes.len(),
        })
    }

    /// Loads through the cache, mapping "no bars" and failures to their outcomes.
    async fn load<T>(&self, query: &SeriesKey) -> std::result::Result<PriceSeries, Outcome<T>> {
        match self
            .loader
            .load(&query.symbol, query.period, query.interval)
            .await
        {
            Ok(series) if !series.is_empty() => Ok(series),
            Ok(_) => {
                tracing::info!(symbol = %query.symbol, period = %query.period, "Provider returned no data.");
                Err(Outcome::EmptyResult {
                    symbol: query.symbol.display_name(),
                })
            }
            Err(e) => {
                tracing::warn!(symbol = %query.symbol, error = %e, "Price load failed.");
                Err(Outcome::ProviderFailure {
                    symbol: query.symbol.display_name(),
                    reason: e.to_string(),
                })
            }
        }
    }
}
