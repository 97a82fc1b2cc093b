use thiserror::Error;

/// Errors raised by the external-collaborator interfaces (C7): the chain
/// table, the rate curve, the dividend schedule, and historical volatility.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChainError {
    #[error("row index {index} out of bounds (chain has {len} rows)")]
    RowOutOfBounds { index: usize, len: usize },

    #[error("no rate available for term {term_years} years")]
    NoRateForTerm { term_years: f64 },

    #[error("no dividend schedule for symbol '{symbol}'")]
    NoDividendSchedule { symbol: String },

    #[error("no historical volatility for symbol '{symbol}'")]
    NoHistoricalVolatility { symbol: String },
}

pub type ChainResult<T> = Result<T, ChainError>;
