// In crates/engine/src/outcome.rs

use serde::Serialize;

/// The result of a dashboard action as the user should see it.
///
/// "No data", "provider failed" and "not enough history" each need a
/// different notice, so they are variants here rather than one error channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<T> {
    Ready(T),
    /// The provider returned no bars for the request.
    EmptyResult { symbol: String },
    /// The fetch failed; the user may retry.
    ProviderFailure { symbol: String, reason: String },
    /// Data exists but is too short for a committal signal.
    InsufficientHistory {
        symbol: String,
        observed: usize,
        required: usize,
    },
}

impl<T> Outcome<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Outcome::Ready(_))
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Outcome::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The user-facing message for non-ready outcomes.
    pub fn notice(&self) -> Option<String> {
        match self {
            Outcome::Ready(_) => None,
            Outcome::EmptyResult { symbol } => Some(format!(
                "No data available for {}. Check the ticker and period.",
                symbol
            )),
            Outcome::ProviderFailure { symbol, reason } => Some(format!(
                "Could not load prices for {}: {}. Please try again.",
                symbol, reason
            )),
            Outcome::InsufficientHistory { symbol, observed, required } => Some(format!(
                "Not enough history for {} ({} of {} bars). Try a longer period.",
                symbol, observed, required
            )),
        }
    }
}
