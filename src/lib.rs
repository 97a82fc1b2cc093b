#![allow(unknown_lints)]
#![allow(clippy::literal_string_with_formatting_args)]

//! # optionanalytics
//!
//! An options-analytics engine: given an option chain snapshot and an
//! underlying spot price, it evaluates the risk-neutral expected value of
//! covered calls, cash-secured puts, and vertical call/put spreads. For every
//! candidate position it computes a theoretical price, the full Greek set
//! (delta, gamma, theta, vega, rho), an implied volatility recovered from the
//! market mid, a probability-of-profit curve derived from a risk-neutral
//! terminal-price distribution, and an expected-loss figure.
//!
//! ## Core modules
//!
//! - [`pricing`] — the pricing-model family (C2): generalized Black-Scholes,
//!   Barone-Adesi-Whaley, Bjerksund-Stensland, Roll-Geske-Whaley, Cox-Ross-
//!   Rubinstein and equal-probability binomial lattices, Phelim-Boyle and
//!   alternative trinomial lattices, and Monte Carlo — all behind the
//!   [`pricing::PricingModel`] capability trait.
//! - [`volatility`] — the implied-volatility solvers (C3): Newton-Raphson,
//!   strict bisection, and an exhaustive alternative bisection fallback.
//! - [`analyzer`] — the expected-value analyzer (C5): Greek generation,
//!   probability-curve construction, and per-strategy scoring.
//! - [`calculator`] — the calculator façade (C6): the single entry point
//!   that parameterizes the analyzer over one pricing model and one IV
//!   solver and exposes `analyze(strategy)`.
//! - [`chain`] — the external contracts (C7): the read-only chain table, the
//!   result sink, the risk-free-rate term structure, the dividend schedule,
//!   and the historical-volatility lookup.
//! - [`model`] — shared data types: the `Positive` newtype, expiration
//!   handling, option contracts, market context, and Greeks.
//! - [`distributions`] — the cumulative normal Φ and bivariate normal Φ₂
//!   helpers (C1) shared by every pricing model.
//! - [`stats`] — sample mean and population standard deviation (C4).
//! - [`error`] — the `thiserror`-derived error hierarchy for every layer.
//! - [`config`] — tunable lattice depths, Monte Carlo path counts, volatility
//!   bounds, and trade-cost figures.
//! - [`utils`] — logging setup and small numeric/test helpers.
//!
//! ## Scope
//!
//! No order placement or execution, no real-time streaming arithmetic, no
//! full volatility-surface calibration, and no path-dependent exotics — only
//! vanilla European/American calls and puts, optionally with a discrete cash-
//! dividend schedule. The persistent store, UI, and network ingestion layer
//! that a host application wraps this crate in are modelled only as the
//! narrow [`chain::ChainTable`]/[`chain::ResultSink`] traits in [`chain`];
//! this crate never reaches back into global or singleton state.
//!
//! ## Usage
//!
//! ```rust
//! use optionanalytics::calculator::Calculator;
//! use optionanalytics::chain::{ChainRow, ChainTable, StrategyTag, VecChainTable, VecResultSink};
//! use optionanalytics::config::Config;
//! use optionanalytics::model::types::OptionStyle;
//! use optionanalytics::pricing::black_scholes::GeneralizedBlackScholes;
//! use optionanalytics::volatility::NewtonRaphson;
//!
//! let chain = VecChainTable::new(vec![
//!     ChainRow {
//!         strike: 95.0,
//!         style: OptionStyle::Call,
//!         bid: Some(7.6),
//!         ask: Some(8.0),
//!         last: Some(7.8),
//!         mark: Some(7.8),
//!         multiplier: 100.0,
//!         is_european: true,
//!         days_to_expiry: 182.5,
//!     },
//!     ChainRow {
//!         strike: 100.0,
//!         style: OptionStyle::Call,
//!         bid: Some(4.6),
//!         ask: Some(5.0),
//!         last: Some(4.8),
//!         mark: Some(4.8),
//!         multiplier: 100.0,
//!         is_european: true,
//!         days_to_expiry: 182.5,
//!     },
//!     ChainRow {
//!         strike: 105.0,
//!         style: OptionStyle::Call,
//!         bid: Some(2.6),
//!         ask: Some(3.0),
//!         last: Some(2.8),
//!         mark: Some(2.8),
//!         multiplier: 100.0,
//!         is_european: true,
//!         days_to_expiry: 182.5,
//!     },
//! ]);
//! let mut sink = VecResultSink::default();
//!
//! let calculator = Calculator::new(
//!     100.0,
//!     0.05,
//!     |time| Ok(GeneralizedBlackScholes::new(100.0, 0.05, 0.05, 0.2, time)),
//!     NewtonRaphson,
//!     Config::default(),
//! );
//! calculator
//!     .analyze(&chain, StrategyTag::CoveredCall, &mut sink)
//!     .unwrap();
//! assert!(!sink.rows.is_empty());
//! ```

/// The expected-value analyzer (C5): Greek generation, risk-neutral
/// probability-curve construction, and single-leg/vertical-spread strategy
/// scoring driven over a chain's strike ladder.
pub mod analyzer;

/// The calculator façade (C6): the sole external entry point, parameterizing
/// the analyzer over one pricing model and one implied-volatility solver.
pub mod calculator;

/// External contracts (C7): the read-only chain table, the result sink, the
/// risk-free-rate term structure, the dividend schedule, and the historical-
/// volatility lookup that the core depends on but never implements.
pub mod chain;

/// Tunable engine parameters: lattice depths, Monte Carlo path counts,
/// volatility bounds, and per-leg trade cost.
pub mod config;

/// Numerical constants shared across the pricing and volatility modules.
pub mod constants;

/// Cumulative normal Φ(x) and bivariate normal Φ₂(a,b,ρ) (C1), shared by
/// every pricing model.
pub mod distributions;

/// The `thiserror`-derived error hierarchy for every layer of the pipeline.
pub mod error;

/// Greek calculation helpers: closed-form Black-Scholes Greeks and the
/// finite-difference/lattice-node extraction used by models with no closed
/// form.
pub mod greeks;

/// Core data structures: the `Positive` newtype, expiration handling,
/// option contracts, market context, and the Greek record.
pub mod model;

/// Convenience re-exports of the most commonly used types and traits.
pub mod prelude;

/// The pricing-model family (C2): every model implements the
/// [`pricing::PricingModel`] capability trait.
pub mod pricing;

/// Sample statistics (C4): mean and population standard deviation.
pub mod stats;

/// Logging setup and small numeric/test helpers.
pub mod utils;

/// The implied-volatility solvers (C3): Newton-Raphson, strict bisection,
/// and exhaustive alternative bisection.
pub mod volatility;

pub use calculator::Calculator;
pub use chain::{ChainTable, ResultSink, StrategyTag};
pub use model::positive::Positive;
pub use model::types::{ExerciseStyle, OptionStyle, Side};
pub use pricing::PricingModel;
pub use volatility::VolatilitySolver;
