//! Bjerksund-Stensland: a trigger-price approximation for American options
//! (`spec.md` §4.2).

use crate::distributions::big_n;
use crate::error::PricingError;
use crate::greeks::numerical::finite_difference_greeks;
use crate::model::option::Greek;
use crate::model::types::OptionStyle;
use crate::pricing::PricingModel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BjerksundStensland {
    pub spot: f64,
    pub rate: f64,
    pub carry: f64,
    pub sigma: f64,
    pub time: f64,
}

impl BjerksundStensland {
    pub fn new(spot: f64, rate: f64, carry: f64, sigma: f64, time: f64) -> Self {
        BjerksundStensland {
            spot,
            rate,
            carry,
            sigma,
            time,
        }
    }

    /// `phi*(S, T, gamma, H, I)`, the auxiliary function of the
    /// Bjerksund-Stensland trigger-price decomposition.
    #[allow(clippy::too_many_arguments)]
    fn phi_star(
        spot: f64,
        time: f64,
        gamma: f64,
        h: f64,
        i: f64,
        rate: f64,
        carry: f64,
        sigma: f64,
    ) -> f64 {
        let lambda = (-rate + gamma * carry + 0.5 * gamma * (gamma - 1.0) * sigma * sigma) * time;
        let d = -((spot / h).ln() + (carry + (gamma - 0.5) * sigma * sigma) * time)
            / (sigma * time.sqrt());
        let kappa = 2.0 * carry / (sigma * sigma) + (2.0 * gamma - 1.0);
        lambda.exp()
            * spot.powf(gamma)
            * (big_n(d) - (i / spot).powf(kappa) * big_n(d - 2.0 * (i / spot).ln() / (sigma * time.sqrt())))
    }

    fn call_value(spot: f64, strike: f64, rate: f64, carry: f64, sigma: f64, time: f64) -> f64 {
        if rate <= carry {
            return crate::greeks::utils::bs_price(
                spot,
                strike,
                rate,
                carry,
                sigma,
                time,
                OptionStyle::Call,
            );
        }
        let sigma_sq = sigma * sigma;
        let beta =
            0.5 - carry / sigma_sq + ((carry / sigma_sq - 0.5).powi(2) + 2.0 * rate / sigma_sq).sqrt();
        let b_inf = beta / (beta - 1.0) * strike;
        let b_zero = strike.max(rate / (rate - carry) * strike);
        let h_t = -(carry * time + 2.0 * sigma * time.sqrt()) * b_zero / (b_inf - b_zero);
        let trigger = b_zero + (b_inf - b_zero) * (1.0 - h_t.exp());

        if spot >= trigger {
            return spot - strike;
        }

        let alpha = (trigger - strike) * trigger.powf(-beta);
        alpha * spot.powf(beta)
            - alpha * Self::phi_star(spot, time, beta, trigger, trigger, rate, carry, sigma)
            + Self::phi_star(spot, time, 1.0, trigger, trigger, rate, carry, sigma)
            - Self::phi_star(spot, time, 1.0, strike, trigger, rate, carry, sigma)
            - strike * Self::phi_star(spot, time, 0.0, trigger, trigger, rate, carry, sigma)
            + strike * Self::phi_star(spot, time, 0.0, strike, trigger, rate, carry, sigma)
    }

    /// `Put(S, K, r, b) = Call(K, S, r - b, -b)`, the transformation named in
    /// `spec.md` §4.2's Bjerksund-Stensland paragraph.
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

impl PricingModel for BjerksundStensland {
    fn price(&self, strike: f64, style: OptionStyle) -> Result<f64, PricingError> {
        let price = self.value(strike, style);
        if price.is_finite() {
            Ok(price)
        } else {
            Err(PricingError::non_finite("BjerksundStensland::price"))
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
        BjerksundStensland { sigma, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greeks::utils::bs_price;

    #[test]
    fn american_call_dominates_european_when_carry_below_rate() {
        let model = BjerksundStensland::new(100.0, 0.08, 0.02, 0.3, 1.0);
        let american = model.price(100.0, OptionStyle::Call).unwrap();
        let european = bs_price(100.0, 100.0, 0.08, 0.02, 0.3, 1.0, OptionStyle::Call);
        assert!(american >= european - 1e-6);
    }

    #[test]
    fn deep_itm_call_exercises_immediately() {
        let model = BjerksundStensland::new(1000.0, 0.08, 0.02, 0.3, 1.0);
        let price = model.price(50.0, OptionStyle::Call).unwrap();
        assert!((price - (1000.0 - 50.0)).abs() < 1e-6);
    }
}
