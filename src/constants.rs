//! Numerical constants shared across the pricing and volatility modules.
//!
//! Most values here are carried over from the original numerical core's own
//! constants rather than invented: the Newton-Raphson and bisection bounds in
//! particular reproduce the source's `EPSILON`/`VOLATILITY_MIN`/`VOLATILITY_MAX`
//! exactly, since IV-recovery test vectors depend on them.
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub(crate) const SECONDS_IN_A_DAY: i64 = 86_400;
pub(crate) const DAYS_IN_A_YEAR: i64 = 365;

/// Generic floating-point comparison tolerance used outside the IV solvers.
pub(crate) const TOLERANCE: f64 = 1e-8;
pub(crate) const EPSILON: Decimal = dec!(0.00000001);

/// Lower/upper clamp applied to any sigma before it is handed to a pricing model.
pub const VOL_MIN: f64 = 1e-7;
pub const VOL_MAX: f64 = 100.0;

/// Newton-Raphson: convergence tolerance and the bounds beyond which divergence is declared.
pub(crate) const NEWTON_EPSILON: f64 = 1e-11;
pub(crate) const NEWTON_VOL_MIN: f64 = 1e-7;
pub(crate) const NEWTON_VOL_MAX: f64 = 1000.0 - 1e-7;

/// Strict bisection: convergence tolerance and search bracket.
pub(crate) const BISECTION_EPSILON: f64 = 1e-8;
pub(crate) const BISECTION_VOL_MIN: f64 = 1e-7;
pub(crate) const BISECTION_VOL_MAX: f64 = 100.99999;

/// Alternative (exhaustive) bisection: geometric sweep parameters.
pub(crate) const ALT_BISECTION_MAX_LOOPS: usize = 64;
pub(crate) const ALT_BISECTION_ERR: f64 = 1e-7;

/// Default lattice depths and Monte-Carlo path count (spec §4.2 defaults).
pub const DEFAULT_BINOMIAL_DEPTH: usize = 256;
pub const DEFAULT_TRINOMIAL_DEPTH: usize = 128;
pub const DEFAULT_MONTE_CARLO_PATHS: usize = 1024;

/// Finite-difference bump sizes for lattice/Monte-Carlo Greeks (spec §4.2/§9).
pub(crate) const VEGA_BUMP: f64 = 0.02;
pub(crate) const RHO_BUMP: f64 = 0.01;
