// In crates/web-server/src/types.rs

use engine::Outcome;
use serde::{Deserialize, Serialize};

/// The query parameters shared by the dashboard endpoints
/// (e.g., `?symbol=AAPL&period=1y&interval=1d`). Missing values fall back to the configured defaults.
#[derive(Debug, Deserialize, Default)]
pub struct DashboardParams {
    pub symbol: Option<String>,
    pub period: Option<String>,
    pub interval: Option<String>,
}

/// An outcome plus its user-facing notice.
#[derive(Debug, Serialize)]
pub struct OutcomeBody<T> {
    #[serde(flatten)]
    pub outcome: Outcome<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl<T> From<Outcome<T>> for OutcomeBody<T> {
    fn from(outcome: Outcome<T>) -> Self {
        let notice = outcome.notice();
        Self { outcome, notice }
    }
}
