// In app/src/main.rs

use anyhow::Result;
use api_client::{CachedPriceLoader, PriceLoader, YahooChartProvider};
use app_config::Settings;
use clap::{Args, Parser, Subcommand};
use core_types::{Interval, Period, SeriesKey, Symbol};
use engine::{Dashboard, Outcome};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::prelude::*;
use web_server::AppState;
use web_server::types::OutcomeBody;

mod report;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Stock price dashboard: charts, key figures and a momentum signal.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// The inputs collected by the dashboard's sidebar.
#[derive(Args, Debug, Clone)]
struct QueryArgs {
    /// The ticker (e.g., "AAPL", or "005930.KS" with an exchange suffix).
    #[arg(short, long)]
    symbol: Option<String>,

    /// Lookback period: 1mo, 3mo, 6mo, 1y, 2y or 5y.
    #[arg(short, long)]
    period: Option<Period>,

    /// Bar interval: 1d, 1wk or 1mo.
    #[arg(short, long)]
    interval: Option<Interval>,

    /// Print the raw JSON outcome instead of a summary.
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Loads prices and shows the key figures and recent bars.
    Chart {
        #[command(flatten)]
        query: QueryArgs,

        /// Number of recent bars to print.
        #[arg(long, default_value_t = 10)]
        rows: usize,
    },

    /// Computes the moving-average crossover momentum signal.
    Signal {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Serves the dashboard as a JSON API.
    Serve,
}

// --- Main Application Entry Point ---

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let cli = Cli::parse();

    let settings = app_config::load_settings()?;
    init_tracing(&settings.app.log_level);
    tracing::info!(environment = %settings.app.environment, "Starting stock-recommender");

    let dashboard = build_dashboard(&settings)?;

    // Match on the parsed command and call the appropriate handler.
    match cli.command {
        Commands::Chart { query, rows } => {
            let key = resolve_query(&query, &settings);
            let outcome = dashboard.chart(&key).await;
            if query.json {
                print_json(outcome)?;
            } else if let Some(report) = present(outcome) {
                report::print_chart_report(&report, rows);
            }
        }
        Commands::Signal { query } => {
            let key = resolve_query(&query, &settings);
            let outcome = dashboard.momentum(&key).await;
            if query.json {
                print_json(outcome)?;
            } else if let Some(report) = present(outcome) {
                report::print_signal_report(&report);
            }
        }
        Commands::Serve => {
            let state = AppState::new(dashboard, settings.dashboard.clone());
            web_server::run(settings.server.clone(), state).await?;
        }
    }

    Ok(())
}

/// Installs the fmt subscriber. Unknown levels fall back to INFO.
fn init_tracing(log_level: &str) {
    let level = log_level.parse::<tracing::Level>().unwrap_or(tracing::Level::INFO);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_filter(tracing_subscriber::filter::Targets::new()
            .with_target("hyper", tracing::Level::WARN)
            .with_target("reqwest", tracing::Level::WARN)
            .with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();
}

/// Wires the provider, the TTL cache and the dashboard from settings.
fn build_dashboard(settings: &Settings) -> Result<Dashboard<Arc<dyn PriceLoader>>> {
    let provider = YahooChartProvider::new(&settings.provider)?;
    let loader: Arc<dyn PriceLoader> = Arc::new(CachedPriceLoader::new(
        provider,
        Duration::from_secs(settings.cache.ttl_secs),
    ));
    Dashboard::from_settings(loader, &settings.dashboard)
}

/// Fills in anything the user left out from the configured defaults.
fn resolve_query(args: &QueryArgs, settings: &Settings) -> SeriesKey {
    let defaults = &settings.dashboard;
    let symbol = args
        .symbol
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(&defaults.default_symbol);

    SeriesKey::new(
        Symbol::new(symbol),
        args.period.unwrap_or(defaults.default_period),
        args.interval.unwrap_or(defaults.default_interval),
    )
}

/// Returns the report for a ready outcome; prints the notice for anything else.
fn present<T>(outcome: Outcome<T>) -> Option<T> {
    if let Some(notice) = outcome.notice() {
        match &outcome {
            Outcome::ProviderFailure { .. } => tracing::warn!("{}", notice),
            _ => tracing::info!("{}", notice),
        }
        println!("{}", notice);
    }
    outcome.ready()
}

fn print_json<T: serde::Serialize>(outcome: Outcome<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&OutcomeBody::from(outcome))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_query_arguments() {
        let cli = Cli::try_parse_from(["app", "signal", "-s", "msft", "-p", "2y", "-i", "1wk"]).unwrap();
        let Commands::Signal { query } = cli.command else {
            panic!("expected the signal subcommand");
        };
        assert_eq!(query.symbol.as_deref(), Some("msft"));
        assert_eq!(query.period, Some(Period::TwoYears));
        assert_eq!(query.interval, Some(Interval::Weekly));
        assert!(!query.json);
    }

    #[test]
    fn cli_rejects_unknown_period() {
        assert!(Cli::try_parse_from(["app", "chart", "--period", "10y"]).is_err());
    }

    #[test]
    fn missing_arguments_use_defaults() {
        let cli = Cli::try_parse_from(["app", "chart", "--symbol", "  "]).unwrap();
        let Commands::Chart { query, rows } = cli.command else {
            panic!("expected the chart subcommand");
        };
        let key = resolve_query(&query, &Settings::default());

        assert_eq!(rows, 10);
        assert_eq!(key, SeriesKey::new(Symbol::new("AAPL"), Period::OneYear, Interval::Daily));
    }

    #[test]
    fn not_ready_outcomes_present_nothing() {
        let outcome: Outcome<u8> = Outcome::EmptyResult { symbol: "ZZZ".into() };
        assert_eq!(present(outcome), None);
        assert_eq!(present(Outcome::Ready(3u8)), Some(3));
    }
}
