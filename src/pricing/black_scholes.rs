//! Generalized Black-Scholes: the closed-form European model every other
//! pricer either wraps or falls back to (`spec.md` §4.2).

use crate::error::PricingError;
use crate::greeks::utils::{bs_greeks, bs_price};
use crate::model::option::Greek;
use crate::model::types::OptionStyle;
use crate::pricing::PricingModel;

/// Owns `(S, r, b, sigma, T)` and prices any `(strike, style)` pair against
/// them in closed form. Cheap enough that [`PricingModel::with_sigma`] just
/// returns a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralizedBlackScholes {
    pub spot: f64,
    pub rate: f64,
    pub carry: f64,
    pub sigma: f64,
    pub time: f64,
}

impl GeneralizedBlackScholes {
    pub fn new(spot: f64, rate: f64, carry: f64, sigma: f64, time: f64) -> Self {
        GeneralizedBlackScholes {
            spot,
            rate,
            carry,
            sigma,
            time,
        }
    }
}

impl PricingModel for GeneralizedBlackScholes {
    fn price(&self, strike: f64, style: OptionStyle) -> Result<f64, PricingError> {
        let price = bs_price(
            self.spot, strike, self.rate, self.carry, self.sigma, self.time, style,
        );
        if price.is_finite() {
            Ok(price)
        } else {
            Err(PricingError::non_finite("GeneralizedBlackScholes::price"))
        }
    }

    fn partials(&self, strike: f64, style: OptionStyle) -> Result<Greek, PricingError> {
        let greek = bs_greeks(
            self.spot, strike, self.rate, self.carry, self.sigma, self.time, style,
        );
        if greek.delta.is_finite() && greek.vega.is_finite() {
            Ok(greek)
        } else {
            Err(PricingError::non_finite("GeneralizedBlackScholes::partials"))
        }
    }

    fn vega(&self, strike: f64, style: OptionStyle) -> Result<f64, PricingError> {
        Ok(self.partials(strike, style)?.vega)
    }

    fn seed_sigma(&self, strike: f64) -> f64 {
        crate::pricing::manaster_koehler_seed(self.spot, strike, self.rate, self.time)
    }

    fn is_european(&self) -> bool {
        true
    }

    fn sigma(&self) -> f64 {
        self.sigma
    }

    fn with_sigma(&self, sigma: f64) -> Self {
        GeneralizedBlackScholes { sigma, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn scenario_s1_put() {
        let model = GeneralizedBlackScholes::new(75.0, 0.10, 0.05, 0.35, 0.5);
        assert_relative_eq!(
            model.price(70.0, OptionStyle::Put).unwrap(),
            4.0870,
            epsilon = 1e-3
        );
    }

    #[test]
    fn scenario_s2_call() {
        let model = GeneralizedBlackScholes::new(60.0, 0.08, 0.08, 0.30, 0.25);
        assert_relative_eq!(
            model.price(65.0, OptionStyle::Call).unwrap(),
            2.1334,
            epsilon = 1e-3
        );
    }

    #[test]
    fn is_always_european() {
        let model = GeneralizedBlackScholes::new(100.0, 0.05, 0.05, 0.2, 1.0);
        assert!(model.is_european());
    }

    #[test]
    fn with_sigma_rebuilds_value() {
        let model = GeneralizedBlackScholes::new(100.0, 0.05, 0.05, 0.2, 1.0);
        let bumped = model.with_sigma(0.3);
        assert_eq!(bumped.sigma, 0.3);
        assert_eq!(bumped.spot, model.spot);
    }
}
