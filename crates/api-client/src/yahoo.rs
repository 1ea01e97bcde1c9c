// In crates/api-client/src/yahoo.rs

use crate::types::{ChartEnvelope, QuoteColumns, YahooChartProvider};
use crate::{Error, MarketDataProvider, Result};
use app_config::ProviderSettings;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use core_types::{PriceBar, SeriesKey};
use rust_decimal::Decimal;
use reqwest::Url;
use rust_decimal::prelude::FromPrimitive;
use std::time::Duration;

/// Yahoo's error code for an unknown or delisted symbol.
const NOT_FOUND_CODE: &str = "Not Found";

/// Decimal places kept when converting provider floats.
const PRICE_SCALE: u32 = 6;

impl YahooChartProvider {
    /// Constructs a new provider from `ProviderSettings`.
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| Error::ClientBuildError(e.to_string()))?;

        let base_url = Url::parse(&settings.base_url)
            .map_err(|e| Error::ClientBuildError(format!("invalid base URL {:?}: {}", settings.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::ClientBuildError(format!(
                "base URL {:?} cannot carry a path",
                settings.base_url
            )));
        }

        Ok(YahooChartProvider { http_client, base_url })
    }

    /// The chart endpoint for `symbol`. The symbol is one percent-encoded
    /// path segment, so `/`, `?` and `#` never change the route.
    pub fn chart_url(&self, symbol: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::ClientBuildError("base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart"])
            .push(symbol);
        Ok(url)
    }
}

#[async_trait]
impl MarketDataProvider for YahooChartProvider {
    fn name(&self) -> &'static str {
        "yahoo-chart"
    }

    /// Fetches adjusted bars.
    ///
    /// This corresponds to the `GET /v8/finance/chart/{symbol}` endpoint.
    async fn fetch(&self, request: &SeriesKey) -> Result<Vec<PriceBar>> {
        let url = self.chart_url(&request.symbol.0)?;

        tracing::debug!(
            url = %url,
            period = %request.period,
            interval = %request.interval,
            "Requesting chart data."
        );

        let response = self
            .http_client
            .get(url)
            .query(&[
                ("range", request.period.as_str()),
                ("interval", request.interval.as_str()),
                ("events", "div,splits"),
                ("includeAdjustedClose", "true"),
            ])
            .send()
            .await
            .map_err(Error::RequestFailed)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::RequestFailed)?;

        match parse_chart_response(&body) {
            Ok(bars) => Ok(bars),
            // The body was not a chart document at all; report the HTTP status instead.
            Err(Error::DeserializationFailed(_)) if !status.is_success() => Err(Error::ApiError {
                code: status.as_u16().to_string(),
                msg: status.canonical_reason().unwrap_or("Unexpected status").to_string(),
            }),
            Err(e) => Err(e),
        }
    }
}

/// Parses a chart API body into adjusted bars.
///
/// Bars with a missing open, high, low or close are dropped. When an
/// adjusted close is available, open/high/low are scaled by
/// `adjclose / close` and the close is replaced by the adjusted close.
pub fn parse_chart_response(body: &str) -> Result<Vec<PriceBar>> {
    let envelope: ChartEnvelope = serde_json::from_str(body).map_err(Error::DeserializationFailed)?;

    // Yahoo reports unknown symbols as an error object; that is "no data", not a failure.
    if let Some(error) = envelope.chart.error {
        if error.code == NOT_FOUND_CODE {
            tracing::debug!(description = ?error.description, "Provider has no data for symbol.");
            return Ok(Vec::new());
        }
        return Err(Error::ApiError {
            code: error.code,
            msg: error.description.unwrap_or_else(|| "Unknown error".to_string()),
        });
    }

    let Some(result) = envelope.chart.result.and_then(|results| results.into_iter().next()) else {
        return Ok(Vec::new());
    };
    let Some(quote) = result.indicators.quote.first() else {
        return Ok(Vec::new());
    };
    let adjusted = result.indicators.adjclose.first().map(|column| column.adjclose.as_slice());

    let bars = result
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(i, ts)| {
            let adj_close = adjusted.and_then(|column| value_at(column, i));
            build_bar(*ts, quote, i, adj_close)
        })
        .collect();

    Ok(bars)
}

fn build_bar(ts: i64, quote: &QuoteColumns, i: usize, adj_close: Option<f64>) -> Option<PriceBar> {
    let open = value_at(&quote.open, i)?;
    let high = value_at(&quote.high, i)?;
    let low = value_at(&quote.low, i)?;
    let close = value_at(&quote.close, i)?;
    let volume = value_at(&quote.volume, i).unwrap_or(0.0);

    let ratio = match adj_close {
        Some(adj) if close != 0.0 => adj / close,
        _ => 1.0,
    };

    Some(PriceBar {
        timestamp: Utc.timestamp_opt(ts, 0).single()?,
        open: to_price(open * ratio)?,
        high: to_price(high * ratio)?,
        low: to_price(low * ratio)?,
        close: to_price(adj_close.filter(|_| close != 0.0).unwrap_or(close))?,
        volume: volume.max(0.0) as u64,
    })
}

fn value_at(column: &[Option<f64>], i: usize) -> Option<f64> {
    column.get(i).copied().flatten()
}

fn to_price(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value).map(|d| d.round_dp(PRICE_SCALE))
}
