use crate::error::DecimalError;
use thiserror::Error;

/// Errors produced by a pricing-model implementation (C2).
#[derive(Error, Debug)]
pub enum PricingError {
    /// A named pricing method failed to produce a finite result.
    #[error("Pricing method '{method}' failed: {reason}")]
    MethodError { method: String, reason: String },

    /// Monte-Carlo simulation could not complete.
    #[error("Simulation failed: {reason}")]
    SimulationError { reason: String },

    /// A model was asked to price a configuration it does not support
    /// (e.g. a put through Roll-Geske-Whaley).
    #[error("Invalid pricing engine configuration: {reason}")]
    InvalidEngine { reason: String },

    /// A numerical routine returned NaN or infinity.
    #[error("Non-finite result in '{context}'")]
    NonFinite { context: String },

    #[error(transparent)]
    Decimal(#[from] DecimalError),

    #[error("Pricing error: {reason}")]
    OtherError { reason: String },
}

impl PricingError {
    pub fn method_error(method: &str, reason: &str) -> Self {
        PricingError::MethodError {
            method: method.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn simulation_error(reason: &str) -> Self {
        PricingError::SimulationError {
            reason: reason.to_string(),
        }
    }

    pub fn invalid_engine(reason: &str) -> Self {
        PricingError::InvalidEngine {
            reason: reason.to_string(),
        }
    }

    pub fn non_finite(context: &str) -> Self {
        PricingError::NonFinite {
            context: context.to_string(),
        }
    }

    pub fn other(reason: &str) -> Self {
        PricingError::OtherError {
            reason: reason.to_string(),
        }
    }
}

impl From<String> for PricingError {
    fn from(s: String) -> Self {
        PricingError::OtherError { reason: s }
    }
}

impl From<&str> for PricingError {
    fn from(s: &str) -> Self {
        PricingError::OtherError {
            reason: s.to_string(),
        }
    }
}

pub type PricingResult<T> = Result<T, PricingError>;
