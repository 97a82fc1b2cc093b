use crate::error::{ChainError, PricingError, VolatilityError};
use thiserror::Error;

/// Errors surfaced by the expected-value analyzer (C5) and calculator façade (C6).
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Fewer than 3 strikes survived the Greek-generation stage on the chosen side.
    #[error("insufficient strikes: need at least {needed}, found {found}")]
    InsufficientStrikes { needed: usize, found: usize },

    /// The chain table held no mark for the underlying.
    #[error("no mark price available for underlying")]
    MissingUnderlyingMark,

    /// A strategy was requested that the chain cannot support (e.g. a spread
    /// requested when only one strike is present).
    #[error("strategy '{strategy}' is not supported for this chain: {reason}")]
    UnsupportedStrategy { strategy: String, reason: String },

    /// `T <= 0`, `S <= 0`, or `K <= 0` somewhere in the chain row.
    #[error("contract violation: {reason}")]
    ContractViolation { reason: String },

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Volatility(#[from] VolatilityError),

    #[error(transparent)]
    Chain(#[from] ChainError),
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
