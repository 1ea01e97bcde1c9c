// In crates/core-types/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown period '{0}'. Expected one of: 1mo, 3mo, 6mo, 1y, 2y, 5y")]
    InvalidPeriod(String),
    #[error("Unknown interval '{0}'. Expected one of: 1d, 1wk, 1mo")]
    InvalidInterval(String),
}

pub type Result<T> = std::result::Result<T, Error>;
