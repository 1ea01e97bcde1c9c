// In crates/app-config/src/lib.rs

use config::{Config, Environment, File, FileFormat};

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AppSettings, CacheSettings, DashboardSettings, ProviderSettings, ServerSettings, Settings};

/// Loads the application settings from various sources.
///
/// This function orchestrates the layered configuration loading:
/// 1. Reads from a default `base.toml` file (optional, every key has a default).
/// 2. Merges settings from an environment-specific file (e.g., `development.toml`).
/// 3. Merges settings from environment variables.
pub fn load_settings() -> Result<Settings> {
    load_settings_from("config")
}

/// Same as [`load_settings`], reading the TOML files from `dir`.
pub fn load_settings_from(dir: &str) -> Result<Settings> {
    // Get the current environment. Default to "development" if not set.
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

    let settings = Config::builder()
        .add_source(File::with_name(&format!("{}/base", dir)).required(false))
        .add_source(File::with_name(&format!("{}/{}", dir, environment)).required(false))
        // Environment variables, e.g. `APP_PROVIDER__TIMEOUT_SECS=30`.
        .add_source(Environment::with_prefix("APP").prefix_separator("_").separator("__"))
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    settings.validate()?;

    Ok(settings)
}

impl Settings {
    /// Parses settings from an in-memory TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(content, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects settings the rest of the application cannot work with.
    pub fn validate(&self) -> Result<()> {
        let dashboard = &self.dashboard;
        if dashboard.fast_period == 0 || dashboard.slow_period == 0 {
            return Err(Error::Invalid("moving-average periods must be positive".into()));
        }
        if dashboard.fast_period >= dashboard.slow_period {
            return Err(Error::Invalid(format!(
                "fast_period ({}) must be shorter than slow_period ({})",
                dashboard.fast_period, dashboard.slow_period
            )));
        }
        if self.cache.ttl_secs == 0 {
            return Err(Error::Invalid("cache.ttl_secs must be positive".into()));
        }
        if self.provider.base_url.trim().is_empty() {
            return Err(Error::Invalid("provider.base_url must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{Interval, Period};

    #[test]
    fn empty_document_yields_defaults() {
        let settings = Settings::from_toml_str("").unwrap();

        assert_eq!(settings.app.log_level, "info");
        assert_eq!(settings.cache.ttl_secs, 600);
        assert_eq!(settings.dashboard.default_symbol, "AAPL");
        assert_eq!(settings.dashboard.default_period, Period::OneYear);
        assert_eq!(settings.dashboard.default_interval, Interval::Daily);
        assert_eq!(settings.dashboard.fast_period, 20);
        assert_eq!(settings.dashboard.slow_period, 60);
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn partial_sections_are_merged_with_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [provider]
            timeout_secs = 3

            [dashboard]
            default_symbol = "MSFT"
            default_period = "6mo"
            default_interval = "1wk"
            "#,
        )
        .unwrap();

        assert_eq!(settings.provider.timeout_secs, 3);
        assert_eq!(settings.provider.base_url, "https://query1.finance.yahoo.com");
        assert_eq!(settings.dashboard.default_symbol, "MSFT");
        assert_eq!(settings.dashboard.default_period, Period::SixMonths);
        assert_eq!(settings.dashboard.default_interval, Interval::Weekly);
        assert_eq!(settings.dashboard.table_rows, 200);
    }

    #[test]
    fn inverted_windows_are_rejected() {
        let err = Settings::from_toml_str(
            r#"
            [dashboard]
            fast_period = 60
            slow_period = 20
            "#,
        )
        .unwrap_err();

        assert!(matches!(err, Error::Invalid(_)));
    }

    #[test]
    fn zero_ttl_is_rejected() {
        let err = Settings::from_toml_str("[cache]\nttl_secs = 0").unwrap_err();
        assert!(matches!(err, Error::Invalid(_)));
    }

    #[test]
    fn unknown_period_code_fails_to_load() {
        let err = Settings::from_toml_str("[dashboard]\ndefault_period = \"7y\"").unwrap_err();
        assert!(matches!(err, Error::LoadError(_)));
    }
}
