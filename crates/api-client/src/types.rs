// In crates/api-client/src/types.rs

use reqwest::{Client, Url};
use serde::Deserialize;

/// The client for the Yahoo Finance chart API.
#[derive(Debug, Clone)]
pub struct YahooChartProvider {
    /// The persistent HTTP client (timeout and user agent preconfigured).
    pub http_client: Client,
    /// The base URL for the chart API.
    pub base_url: Url,
}

/// Top-level chart response: `{"chart": {"result": [...], "error": null}}`.
#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub chart: ChartBody,
}

#[derive(Debug, Deserialize)]
pub struct ChartBody {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

/// The error object Yahoo embeds in the chart body.
#[derive(Debug, Deserialize)]
pub struct ChartError {
    /// e.g. "Not Found", "Bad Request".
    pub code: String,
    pub description: Option<String>,
}

/// Column-oriented bar data for one symbol.
#[derive(Debug, Deserialize)]
pub struct ChartResult {
    /// Bar open times as UTC epoch seconds. Absent when there is no data.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteColumns>,
    #[serde(default)]
    pub adjclose: Vec<AdjCloseColumn>,
}

/// Unadjusted OHLCV columns. Entries are null for bars the exchange skipped.
#[derive(Debug, Deserialize)]
pub struct QuoteColumns {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

/// Close adjusted for splits and dividends.
#[derive(Debug, Deserialize)]
pub struct AdjCloseColumn {
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}
