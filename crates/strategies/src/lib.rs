// In crates/strategies/src/lib.rs

use core_types::Signal;
use rust_decimal::Decimal;

pub mod error;
pub mod indicators;
pub mod ma_crossover;
pub mod types;

pub use error::{Error, Result};
pub use ma_crossover::{MACrossover, evaluate};
pub use types::MACrossoverSettings;

/// The universal interface for a momentum strategy.
///
/// A strategy analyzes a series of closing prices (oldest first) and produces
/// a `Signal`. Strategies here are pure: the same input always yields the
/// same signal.
pub trait Strategy {
    /// The name of the strategy.
    fn name(&self) -> &'static str;

    /// The number of observations required for a committal signal.
    fn required_history(&self) -> usize;

    fn assess(&self, closes: &[Decimal]) -> Signal;
}
