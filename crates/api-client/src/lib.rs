// In crates/api-client/src/lib.rs

use async_trait::async_trait;
use core_types::{Interval, Period, PriceBar, PriceSeries, SeriesKey, Symbol};

pub mod error;
pub mod loader;
pub mod types;
pub mod yahoo;

// Re-export public types
pub use error::{Error, Result};
pub use loader::CachedPriceLoader;
pub use types::YahooChartProvider;

/// An upstream source of historical bars.
///
/// Implementations perform exactly one fetch per call; caching is layered on
/// top by [`CachedPriceLoader`].
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name identifying this provider (e.g. "yahoo-chart").
    fn name(&self) -> &'static str;

    /// Fetches adjusted bars for the request.
    ///
    /// An unknown or delisted symbol yields `Ok(vec![])`, not an error.
    async fn fetch(&self, request: &SeriesKey) -> Result<Vec<PriceBar>>;
}

/// Loads a price series for a `(symbol, period, interval)` tuple.
#[async_trait]
pub trait PriceLoader: Send + Sync {
    async fn load(&self, symbol: &Symbol, period: Period, interval: Interval) -> Result<PriceSeries>;
}

#[async_trait]
impl<T: PriceLoader + ?Sized> PriceLoader for std::sync::Arc<T> {
    async fn load(&self, symbol: &Symbol, period: Period, interval: Interval) -> Result<PriceSeries> {
        (**self).load(symbol, period, interval).await
    }
}
