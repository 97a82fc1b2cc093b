//! Pricing-model family (C2).
//!
//! Every model in this module implements [`PricingModel`], the single
//! capability set `spec.md` §9 asks for in place of a class hierarchy:
//! `price`, `partials`, `vega`, `seed_sigma`, `is_european`, and `with_sigma`
//! (a cheap-value-type or cached-lattice-preserving re-price at a new sigma).

pub mod binomial;
pub mod bjerksund_stensland;
pub mod black_scholes;
pub mod barone_adesi_whaley;
pub mod monte_carlo;
pub mod roll_geske_whaley;
pub mod trinomial;

use crate::error::PricingError;
use crate::model::types::OptionStyle;

/// Manaster-Koehler seed: `σ* = sqrt(|ln(S/K) + rT| * 2 / T)`, shared by every
/// model and used as the Newton-Raphson starting point (`spec.md` §4.2).
pub(crate) fn manaster_koehler_seed(spot: f64, strike: f64, rate: f64, time: f64) -> f64 {
    if time <= 0.0 {
        return 0.2;
    }
    let inner = ((spot / strike).ln() + rate * time).abs() * 2.0 / time;
    inner.sqrt_or_default()
}

/// Common capability set exposed by every pricing model.
pub trait PricingModel {
    fn price(&self, strike: f64, style: OptionStyle) -> Result<f64, PricingError>;
    fn partials(&self, strike: f64, style: OptionStyle) -> Result<crate::model::Greek, PricingError>;
    fn vega(&self, strike: f64, style: OptionStyle) -> Result<f64, PricingError>;
    fn seed_sigma(&self, strike: f64) -> f64;
    fn is_european(&self) -> bool;
    fn sigma(&self) -> f64;
    /// Returns a model priced with `sigma` substituted for the current value.
    /// Cheap value types rebuild from scratch; lattice/Monte-Carlo models
    /// reuse their cached shape/RNG draws and only recompute the payoff layer.
    fn with_sigma(&self, sigma: f64) -> Self
    where
        Self: Sized;
}

trait SqrtOrDefault {
    fn sqrt_or_default(self) -> f64;
}

impl SqrtOrDefault for f64 {
    fn sqrt_or_default(self) -> f64 {
        if self.is_finite() && self >= 0.0 { self.sqrt() } else { 0.2 }
    }
}
