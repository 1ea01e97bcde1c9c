// In crates/api-client/src/loader.rs

use crate::{MarketDataProvider, PriceLoader, Result};
use async_trait::async_trait;
use core_types::{Interval, Period, PriceSeries, SeriesKey, Symbol};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// The default lifetime of a cached series.
pub const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

struct CacheEntry {
    loaded_at: Instant,
    series: PriceSeries,
}

/// A [`PriceLoader`] that memoizes provider results per exact
/// `(symbol, period, interval)` tuple for a fixed time-to-live.
///
/// Empty results are cached like any other; failures are not. The cache lock
/// is held across the fetch, so identical concurrent loads hit the provider once.
pub struct CachedPriceLoader<P> {
    provider: P,
    ttl: Duration,
    entries: Mutex<HashMap<SeriesKey, CacheEntry>>,
}

impl<P: MarketDataProvider> CachedPriceLoader<P> {
    pub fn new(provider: P, ttl: Duration) -> Self {
        Self {
            provider,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_default_ttl(provider: P) -> Self {
        Self::new(provider, DEFAULT_TTL)
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of live (unexpired) entries.
    pub async fn cached_entries(&self) -> usize {
        let entries = self.entries.lock().await;
        entries
            .values()
            .filter(|entry| entry.loaded_at.elapsed() < self.ttl)
            .count()
    }

    /// Drops every cached series.
    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }
}

#[async_trait]
impl<P: MarketDataProvider> PriceLoader for CachedPriceLoader<P> {
    async fn load(&self, symbol: &Symbol, period: Period, interval: Interval) -> Result<PriceSeries> {
        let key = SeriesKey::new(symbol.clone(), period, interval);
        let mut entries = self.entries.lock().await;

        let ttl = self.ttl;
        entries.retain(|_, entry| entry.loaded_at.elapsed() < ttl);

        if let Some(entry) = entries.get(&key) {
            tracing::debug!(symbol = %symbol, %period, %interval, "Price cache hit.");
            return Ok(entry.series.clone());
        }

        tracing::info!(
            symbol = %symbol,
            %period,
            %interval,
            provider = self.provider.name(),
            "Price cache miss. Fetching from provider."
        );
        let bars = self.provider.fetch(&key).await?;
        let series = PriceSeries::new(key.clone(), bars);
        tracing::info!(symbol = %symbol, bars = series.len(), "Price series loaded.");

        entries.insert(
            key,
            CacheEntry {
                loaded_at: Instant::now(),
                series: series.clone(),
            },
        );

        Ok(series)
    }
}
