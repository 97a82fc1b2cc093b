use crate::error::PricingError;
use crate::model::positive::Positive;
use thiserror::Error;

/// Errors produced by an implied-volatility solver (C3).
#[derive(Error, Debug)]
pub enum VolatilityError {
    /// Newton-Raphson escaped its `(VOL_MIN, VOL_MAX)` bounds or vega underflowed.
    #[error("Newton-Raphson diverged from seed {seed}: {reason}")]
    NewtonDiverged { seed: Positive, reason: String },

    /// The target price did not lie inside `[price(VOL_MIN), price(VOL_MAX)]`.
    #[error("Target price {target} not bracketed by [{low}, {high}]")]
    NotBracketed { target: f64, low: f64, high: f64 },

    /// The exhaustive alternative-bisection sweep exhausted the whole sigma axis.
    #[error("Alternative bisection exhausted the volatility axis without a crossing")]
    SweepExhausted,

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

pub type VolatilityResult<T> = Result<T, VolatilityError>;
