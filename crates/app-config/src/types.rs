// In crates/app-config/src/types.rs

use core_types::{Interval, Period};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Settings {
    /// The application's general settings.
    #[serde(default)]
    pub app: AppSettings,
    /// Settings for the market-data provider.
    #[serde(default)]
    pub provider: ProviderSettings,
    /// Settings for the price cache.
    #[serde(default)]
    pub cache: CacheSettings,
    /// Defaults and windows used by the dashboard views.
    #[serde(default)]
    pub dashboard: DashboardSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    #[serde(default = "default_environment")]
    pub environment: String,
    /// The log level for the application.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ProviderSettings {
    /// The REST base URL of the chart API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sent with every request; the provider rejects anonymous clients.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CacheSettings {
    /// How long a loaded series is served from memory.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self { ttl_secs: default_ttl_secs() }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct DashboardSettings {
    #[serde(default = "default_symbol")]
    pub default_symbol: String,
    #[serde(default)]
    pub default_period: Period,
    #[serde(default)]
    pub default_interval: Interval,
    /// Short moving-average window.
    #[serde(default = "default_fast_period")]
    pub fast_period: usize,
    /// Long moving-average window; also the minimum history for a signal.
    #[serde(default = "default_slow_period")]
    pub slow_period: usize,
    /// Number of most recent bars included in the raw-data table.
    #[serde(default = "default_table_rows")]
    pub table_rows: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_symbol: default_symbol(),
            default_period: Period::default(),
            default_interval: Interval::default(),
            fast_period: default_fast_period(),
            slow_period: default_slow_period(),
            table_rows: default_table_rows(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Helper functions for serde defaults
fn default_environment() -> String { "development".into() }
fn default_log_level() -> String { "info".into() }
fn default_base_url() -> String { "https://query1.finance.yahoo.com".into() }
fn default_user_agent() -> String { "Mozilla/5.0 (compatible; stock-recommender/0.1)".into() }
fn default_timeout_secs() -> u64 { 10 }
fn default_ttl_secs() -> u64 { 600 }
fn default_symbol() -> String { "AAPL".into() }
fn default_fast_period() -> usize { 20 }
fn default_slow_period() -> usize { 60 }
fn default_table_rows() -> usize { 200 }
fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8080 }
