// In crates/strategies/src/types.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct MACrossoverSettings {
    /// Trailing window of the short moving average.
    pub fast_period: usize,
    /// Trailing window of the long moving average. Also the minimum history.
    pub slow_period: usize,
}

impl Default for MACrossoverSettings {
    fn default() -> Self {
        Self {
            fast_period: 20,
            slow_period: 60,
        }
    }
}
