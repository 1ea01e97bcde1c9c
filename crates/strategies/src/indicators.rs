// In crates/strategies/src/indicators.rs

use rust_decimal::Decimal;

/// Arithmetic mean of the most recent `window` values.
///
/// Returns `None` when `window` is zero or fewer than `window` values exist.
/// Computed in `Decimal`, so a flat window averages to exactly its value.
pub fn trailing_mean(values: &[Decimal], window: usize) -> Option<Decimal> {
    if window == 0 || values.len() < window {
        return None;
    }
    let sum: Decimal = values[values.len() - window..].iter().sum();
    Some(sum / Decimal::from(window))
}
