//! Barone-Adesi-Whaley: a quadratic-approximation American model
//! (`spec.md` §4.2).

use crate::distributions::big_n;
use crate::error::PricingError;
use crate::greeks::numerical::finite_difference_greeks;
use crate::greeks::utils::{bs_greeks, bs_price, d1};
use crate::model::option::Greek;
use crate::model::types::OptionStyle;
use crate::pricing::PricingModel;

/// Owns `(S, r, b, sigma, T)`; American calls/puts via the BAW quadratic
/// approximation to the early-exercise premium.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaroneAdesiWhaley {
    pub spot: f64,
    pub rate: f64,
    pub carry: f64,
    pub sigma: f64,
    pub time: f64,
}

impl BaroneAdesiWhaley {
    pub fn new(spot: f64, rate: f64, carry: f64, sigma: f64, time: f64) -> Self {
        BaroneAdesiWhaley {
            spot,
            rate,
            carry,
            sigma,
            time,
        }
    }

    /// American call value via the quadratic approximation. Falls back to
    /// the European formula when `r <= b` (no early-exercise premium exists
    /// for a call in that regime, per `spec.md` §4.2).
    fn call_value(spot: f64, strike: f64, rate: f64, carry: f64, sigma: f64, time: f64) -> f64 {
        if rate <= carry {
            return bs_price(spot, strike, rate, carry, sigma, time, OptionStyle::Call);
        }

        let sigma_sq = sigma * sigma;
        let m = 2.0 * rate / sigma_sq;
        let n = 2.0 * carry / sigma_sq;
        let k_disc = 1.0 - (-rate * time).exp();
        let q2 = (-(n - 1.0) + ((n - 1.0).powi(2) + 4.0 * m / k_disc).sqrt()) / 2.0;

        let q2_inf = (-(n - 1.0) + ((n - 1.0).powi(2) + 4.0 * m).sqrt()) / 2.0;
        let s_inf = strike / (1.0 - 1.0 / q2_inf);
        let h2 = -(carry * time + 2.0 * sigma * time.sqrt()) * strike / (s_inf - strike);
        let mut s_star = strike + (s_inf - strike) * (1.0 - h2.exp());

        for _ in 0..100 {
            let d1v = d1(s_star, strike, carry, sigma, time);
            let bs = bs_price(s_star, strike, rate, carry, sigma, time, OptionStyle::Call);
            let rhs = bs + (1.0 - ((carry - rate) * time).exp() * big_n(d1v)) * s_star / q2;
            let lhs = s_star - strike;
            let err = (lhs - rhs).abs() / strike;
            if err <= 1e-6 {
                break;
            }
            let bi = ((carry - rate) * time).exp() * big_n(d1v) * (1.0 - 1.0 / q2)
                + (1.0 / q2)
                    * (1.0
                        - ((carry - rate) * time).exp() * crate::distributions::phi_density(d1v)
                            / (sigma * time.sqrt()));
            s_star = (strike + rhs - bi * s_star) / (1.0 - bi);
        }

        if spot >= s_star {
            spot - strike
        } else {
            let d1v = d1(s_star, strike, carry, sigma, time);
            let a2 = (s_star / q2) * (1.0 - ((carry - rate) * time).exp() * big_n(d1v));
            bs_price(spot, strike, rate, carry, sigma, time, OptionStyle::Call)
                + a2 * (spot / s_star).powf(q2)
        }
    }

    /// American put via the put/call transformation documented in
    /// `spec.md` §4.2's Bjerksund-Stensland paragraph and carried over here:
    /// `Put(S, K, r, b) = Call(K, S, r - b, -b)`.
    fn put_value(spot: f64, strike: f64, rate: f64, carry: f64, sigma: f64, time: f64) -> f64 {
        Self::call_value(strike, spot, rate - carry, -carry, sigma, time)
    }

    fn value(&self, strike: f64, style: OptionStyle) -> f64 {
        match style {
            OptionStyle::Call => {
                Self::call_value(self.spot, strike, self.rate, self.carry, self.sigma, self.time)
            }
            OptionStyle::Put => {
                Self::put_value(self.spot, strike, self.rate, self.carry, self.sigma, self.time)
            }
        }
    }
}

impl PricingModel for BaroneAdesiWhaley {
    fn price(&self, strike: f64, style: OptionStyle) -> Result<f64, PricingError> {
        let price = self.value(strike, style);
        if price.is_finite() {
            Ok(price)
        } else {
            Err(PricingError::non_finite("BaroneAdesiWhaley::price"))
        }
    }

    fn partials(&self, strike: f64, style: OptionStyle) -> Result<Greek, PricingError> {
        finite_difference_greeks(self.spot, self.sigma, self.rate, self.time, |s, sigma, r, t| {
            Ok(match style {
                OptionStyle::Call => Self::call_value(s, strike, r, self.carry, sigma, t),
                OptionStyle::Put => Self::put_value(s, strike, r, self.carry, sigma, t),
            })
        })
    }

    fn vega(&self, strike: f64, style: OptionStyle) -> Result<f64, PricingError> {
        Ok(self.partials(strike, style)?.vega)
    }

    fn seed_sigma(&self, strike: f64) -> f64 {
        crate::pricing::manaster_koehler_seed(self.spot, strike, self.rate, self.time)
    }

    fn is_european(&self) -> bool {
        false
    }

    fn sigma(&self) -> f64 {
        self.sigma
    }

    fn with_sigma(&self, sigma: f64) -> Self {
        BaroneAdesiWhaley { sigma, ..*self }
    }
}
