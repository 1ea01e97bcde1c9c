// In crates/strategies/src/ma_crossover.rs

use crate::indicators::trailing_mean;
use crate::types::MACrossoverSettings;
use crate::{Error, Result, Strategy};
use core_types::Signal;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// The moving-average crossover momentum signal.
///
/// Compares the trailing `fast_period` mean of the closes with the trailing
/// `slow_period` mean, both taken at the latest observation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MACrossover {
    /// The configuration for this strategy instance.
    settings: MACrossoverSettings,
}

impl MACrossover {
    /// Creates a new `MACrossover` from its settings.
    ///
    /// Both windows must be positive and the fast window strictly shorter.
    pub fn new(settings: MACrossoverSettings) -> Result<Self> {
        if settings.fast_period == 0 || settings.slow_period == 0 {
            return Err(Error::InvalidSettings("periods must be positive".into()));
        }
        if settings.fast_period >= settings.slow_period {
            return Err(Error::InvalidSettings(format!(
                "fast_period ({}) must be shorter than slow_period ({})",
                settings.fast_period, settings.slow_period
            )));
        }
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &MACrossoverSettings {
        &self.settings
    }

    /// The short and long trailing means at the latest point, if enough data exists.
    pub fn averages(&self, closes: &[Decimal]) -> Option<(Decimal, Decimal)> {
        if closes.len() < self.settings.slow_period {
            return None;
        }
        let short_avg = trailing_mean(closes, self.settings.fast_period)?;
        let long_avg = trailing_mean(closes, self.settings.slow_period)?;
        Some((short_avg, long_avg))
    }
}

impl Strategy for MACrossover {
    fn name(&self) -> &'static str {
        "MACrossover"
    }

    fn required_history(&self) -> usize {
        self.settings.slow_period
    }

    fn assess(&self, closes: &[Decimal]) -> Signal {
        let Some((short_avg, long_avg)) = self.averages(closes) else {
            return Signal::Insufficient;
        };

        // Strict comparison; ties are neutral.
        match short_avg.cmp(&long_avg) {
            Ordering::Greater => Signal::Bullish,
            Ordering::Less => Signal::Bearish,
            Ordering::Equal => Signal::Neutral,
        }
    }
}

/// Evaluates the default 20/60 crossover on a close-price series.
pub fn evaluate(closes: &[Decimal]) -> Signal {
    MACrossover::default().assess(closes)
}
