//! Tunable parameters for the pricing-and-analysis pipeline.
//!
//! Everything here is either a lattice/Monte-Carlo depth, a volatility
//! bound, or a trade-cost figure that `spec.md` §4.5.3/§4.2 explicitly
//! calls out as coming from "external config" rather than being hardcoded.

use crate::constants::{
    DEFAULT_BINOMIAL_DEPTH, DEFAULT_MONTE_CARLO_PATHS, DEFAULT_TRINOMIAL_DEPTH, VOL_MAX, VOL_MIN,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Engine-wide configuration, constructed once per [`crate::calculator::Calculator`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Flat per-leg commission/fee applied in strategy P&L scoring.
    pub trade_cost_per_leg: Decimal,
    /// Contract multiplier (typically 100 shares/contract).
    pub contract_multiplier: Decimal,
    pub lattice_depth_binomial: usize,
    pub lattice_depth_trinomial: usize,
    pub monte_carlo_paths: usize,
    pub vol_min: f64,
    pub vol_max: f64,
    /// Vega magnitude below which Newton-Raphson is declared diverged.
    pub vega_epsilon: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            trade_cost_per_leg: dec!(0.65),
            contract_multiplier: dec!(100),
            lattice_depth_binomial: DEFAULT_BINOMIAL_DEPTH,
            lattice_depth_trinomial: DEFAULT_TRINOMIAL_DEPTH,
            monte_carlo_paths: DEFAULT_MONTE_CARLO_PATHS,
            vol_min: VOL_MIN,
            vol_max: VOL_MAX,
            vega_epsilon: 1e-8,
        }
    }
}
