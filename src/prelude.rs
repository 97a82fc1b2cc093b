//! # Prelude
//!
//! Convenient single-import surface for the most commonly used types and
//! traits. Add this to reduce boilerplate when driving the engine end to
//! end:
//!
//! ```rust
//! use optionanalytics::prelude::*;
//! ```

// Core data model
pub use crate::model::{
    Greek, MarketContext, OptionContract,
    positive::Positive,
    types::{ExerciseStyle, OptionStyle, Side},
    ExpirationDate,
};

// External contracts (C7)
pub use crate::chain::{
    ChainRow, ChainTable, DividendSchedule, FlatHistoricalVolatility, FlatRateCurve,
    HistoricalVolatility, RateCurve, ResultRow, ResultSink, ScheduleDividends, StrategyTag,
    TermRateCurve, VecChainTable, VecResultSink,
};

// Pricing-model family (C2)
pub use crate::pricing::PricingModel;
pub use crate::pricing::barone_adesi_whaley::BaroneAdesiWhaley;
pub use crate::pricing::binomial::BinomialTree;
pub use crate::pricing::bjerksund_stensland::BjerksundStensland;
pub use crate::pricing::black_scholes::GeneralizedBlackScholes;
pub use crate::pricing::monte_carlo::MonteCarlo;
pub use crate::pricing::roll_geske_whaley::RollGeskeWhaley;
pub use crate::pricing::trinomial::TrinomialTree;

// Implied-volatility solvers (C3)
pub use crate::volatility::{AlternativeBisection, Bisection, NewtonRaphson, VolatilitySolver};

// Expected-value analyzer (C5) and calculator façade (C6)
pub use crate::analyzer::{OptionGreeksRecord, build_probability_curve, generate_greeks};
pub use crate::calculator::Calculator;

// Statistics (C4) and the normal-distribution helpers (C1)
pub use crate::distributions::{big_n, big_n2};
pub use crate::stats::{mean, population_std_dev};

// Configuration and error types
pub use crate::config::Config;
pub use crate::error::{
    AnalyzerError, ChainError, DecimalError, PricingError, VolatilityError,
};

// Utility functions
pub use crate::utils::setup_logger;

// Re-export the pos!/spos!/f2p! constructor macros
pub use crate::{f2p, pos, spos};

// Commonly used external dependencies
pub use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;
