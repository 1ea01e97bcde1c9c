// In crates/web-server/src/lib.rs

use api_client::PriceLoader;
use app_config::types::{DashboardSettings, ServerSettings};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use core_types::{Interval, Period, SeriesKey, Symbol};
use engine::{ChartReport, Dashboard, Outcome, SignalReport};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use types::{DashboardParams, OutcomeBody};

pub mod error;
pub mod types;

// Re-export our custom error type for convenience.
pub use error::{Error, Result};

/// The dashboard type served over HTTP.
pub type SharedDashboard = Dashboard<Arc<dyn PriceLoader>>;

/// The shared application state that is available to all API handlers.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<SharedDashboard>,
    /// Used when a request omits symbol, period or interval.
    pub defaults: Arc<DashboardSettings>,
}

impl AppState {
    pub fn new(dashboard: SharedDashboard, defaults: DashboardSettings) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
            defaults: Arc::new(defaults),
        }
    }

    /// Resolves query parameters into a series key, applying defaults.
    fn resolve(&self, params: DashboardParams) -> Result<SeriesKey> {
        let symbol = params
            .symbol
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.defaults.default_symbol.clone());

        let period = match params.period {
            Some(raw) => raw
                .parse::<Period>()
                .map_err(|e| Error::BadRequest(e.to_string()))?,
            None => self.defaults.default_period,
        };
        let interval = match params.interval {
            Some(raw) => raw
                .parse::<Interval>()
                .map_err(|e| Error::BadRequest(e.to_string()))?,
            None => self.defaults.default_interval,
        };

        Ok(SeriesKey::new(Symbol(symbol), period, interval))
    }
}

/// Creates the main application router with all routes and middleware.
pub fn create_router(app_state: AppState) -> Router {
    // Any origin may read the API; it serves public market data only.
    let cors = tower_http::cors::CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    let api_router = Router::new()
        .route("/chart", get(get_chart_handler))
        .route("/signal", get(get_signal_handler));

    Router::new()
        .route("/health", get(health_check_handler))
        .nest("/api", api_router)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// A simple health check handler.
async fn health_check_handler() -> &'static str {
    "OK"
}

/// The handler for `GET /api/chart`.
async fn get_chart_handler(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Response> {
    let query = state.resolve(params)?;
    let outcome: Outcome<ChartReport> = state.dashboard.chart(&query).await;
    Ok(outcome_response(outcome))
}

/// The handler for `GET /api/signal`.
async fn get_signal_handler(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Response> {
    let query = state.resolve(params)?;
    let outcome: Outcome<SignalReport> = state.dashboard.momentum(&query).await;
    Ok(outcome_response(outcome))
}

/// Maps each outcome to its status code; the body always carries the outcome.
fn outcome_response<T: Serialize>(outcome: Outcome<T>) -> Response {
    let status = match &outcome {
        Outcome::Ready(_) => StatusCode::OK,
        Outcome::EmptyResult { .. } => StatusCode::NOT_FOUND,
        Outcome::InsufficientHistory { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        Outcome::ProviderFailure { .. } => StatusCode::BAD_GATEWAY,
    };
    (status, Json(OutcomeBody::from(outcome))).into_response()
}

/// The main entry point for running the web server.
///
/// This function sets up the TCP listener and serves the application router.
/// It will run forever until the process is terminated.
pub async fn run(settings: ServerSettings, app_state: AppState) -> Result<()> {
    let app = create_router(app_state);

    let address = format!("{}:{}", settings.host, settings.port);
    tracing::info!("Web server listening on {}", address);

    let listener = TcpListener::bind(&address).await.map_err(Error::ServerBindError)?;

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(Error::ServeError)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use chrono::{Duration, TimeZone, Utc};
    use core_types::{PriceBar, PriceSeries};
    use rust_decimal::Decimal;
    use serde_json::Value;
    use std::sync::Mutex;
    use tower::ServiceExt;

    /// Returns `count` flat bars for every request, or fails for "FAIL".
    struct FixedLoader {
        count: usize,
        requests: Mutex<Vec<SeriesKey>>,
    }

    #[async_trait]
    impl PriceLoader for FixedLoader {
        async fn load(
            &self,
            symbol: &Symbol,
            period: Period,
            interval: Interval,
        ) -> api_client::Result<PriceSeries> {
            let key = SeriesKey::new(symbol.clone(), period, interval);
            self.requests.lock().unwrap().push(key.clone());
            if symbol.0 == "FAIL" {
                return Err(api_client::Error::ApiError {
                    code: "500".into(),
                    msg: "boom".into(),
                });
            }
            let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
            let bars = (0..self.count)
                .map(|i| PriceBar {
                    timestamp: start + Duration::days(i as i64),
                    open: Decimal::ONE_HUNDRED,
                    high: Decimal::ONE_HUNDRED,
                    low: Decimal::ONE_HUNDRED,
                    close: Decimal::ONE_HUNDRED,
                    volume: 10,
                })
                .collect();
            Ok(PriceSeries::new(key, bars))
        }
    }

    fn app(count: usize) -> (Router, Arc<FixedLoader>) {
        let loader = Arc::new(FixedLoader {
            count,
            requests: Mutex::new(Vec::new()),
        });
        let shared: Arc<dyn PriceLoader> = loader.clone();
        let settings = DashboardSettings::default();
        let dashboard = Dashboard::from_settings(shared, &settings).unwrap();
        (create_router(AppState::new(dashboard, settings)), loader)
    }

    async fn fetch_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn health_check() {
        let (router, _) = app(0);
        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn chart_ready() {
        let (router, _) = app(30);
        let (status, json) = fetch_json(router, "/api/chart?symbol=msft&period=6mo&interval=1wk").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ready");
        assert_eq!(json["display_name"], "MSFT");
        assert_eq!(json["period"], "6mo");
        assert_eq!(json["interval"], "1wk");
        assert_eq!(json["series"]["bars"].as_array().unwrap().len(), 30);
        assert!(json["summary"]["ma_long"].is_null());
        assert!(json.get("notice").is_none());
    }

    #[tokio::test]
    async fn missing_params_use_defaults() {
        let (router, loader) = app(60);
        let (status, json) = fetch_json(router, "/api/signal").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["signal"], "neutral");
        let requests = loader.requests.lock().unwrap();
        assert_eq!(
            requests[0],
            SeriesKey::new(Symbol::new("AAPL"), Period::OneYear, Interval::Daily)
        );
    }

    #[tokio::test]
    async fn empty_result_is_not_found() {
        let (router, _) = app(0);
        let (status, json) = fetch_json(router, "/api/chart?symbol=ZZZZ").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["status"], "empty_result");
        assert!(json["notice"].as_str().unwrap().contains("ZZZZ"));
    }

    #[tokio::test]
    async fn short_history_is_unprocessable() {
        let (router, _) = app(59);
        let (status, json) = fetch_json(router, "/api/signal?symbol=AAPL").await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["status"], "insufficient_history");
        assert_eq!(json["observed"], 59);
        assert_eq!(json["required"], 60);
    }

    #[tokio::test]
    async fn provider_failure_is_bad_gateway() {
        let (router, _) = app(100);
        let (status, json) = fetch_json(router, "/api/signal?symbol=FAIL").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["status"], "provider_failure");
    }

    #[tokio::test]
    async fn invalid_period_is_bad_request() {
        let (router, loader) = app(100);
        let (status, json) = fetch_json(router, "/api/chart?period=10y").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("10y"));
        assert!(loader.requests.lock().unwrap().is_empty());
    }
}
