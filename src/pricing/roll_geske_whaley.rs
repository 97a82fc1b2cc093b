//! Roll-Geske-Whaley: an American *call* with exactly one known discrete
//! cash dividend (`spec.md` §4.2). Puts are unsupported — see
//! [`PricingModel::price`]'s `Err` branch rather than the original source's
//! documented "returns 0" quirk (`spec.md` §9 Open Questions).

use crate::distributions::{big_n, big_n2};
use crate::error::PricingError;
use crate::greeks::numerical::finite_difference_greeks;
use crate::greeks::utils::bs_price;
use crate::model::option::Greek;
use crate::model::types::OptionStyle;
use crate::pricing::PricingModel;

/// Owns `(S, r, sigma)` plus the two invariant-named time parameters from
/// `SPEC_FULL.md` §4.2: `expiry` (`T`) and `dividend_time` (`t_d`), with
/// `dividend_time <= expiry` enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollGeskeWhaley {
    pub spot: f64,
    pub rate: f64,
    pub sigma: f64,
    pub expiry: f64,
    pub dividend_time: f64,
    pub dividend_amount: f64,
}

impl RollGeskeWhaley {
    pub fn new(
        spot: f64,
        rate: f64,
        sigma: f64,
        expiry: f64,
        dividend_time: f64,
        dividend_amount: f64,
    ) -> Result<Self, PricingError> {
        if dividend_time > expiry {
            return Err(PricingError::invalid_engine(
                "dividend_time must not exceed expiry",
            ));
        }
        Ok(RollGeskeWhaley {
            spot,
            rate,
            sigma,
            expiry,
            dividend_time,
            dividend_amount,
        })
    }

    /// Bisects `f(s) = BSCall(s, K, r, sigma, T - t_d) - (s - K + d)` for the
    /// ex-dividend critical price above which early exercise at `t_d`
    /// dominates, doubling the upper bracket until `f` turns positive
    /// (`spec.md` §4.2).
    fn critical_price(&self, strike: f64) -> f64 {
        let remaining = (self.expiry - self.dividend_time).max(1e-8);
        let f = |s: f64| {
            bs_price(s, strike, self.rate, self.rate, self.sigma, remaining, OptionStyle::Call)
                - (s - strike + self.dividend_amount)
        };

        let mut upper = strike.max(1.0);
        let mut guard = 0;
        while f(upper) <= 0.0 && guard < 64 {
            upper *= 2.0;
            guard += 1;
        }
        let mut lo = 0.0_f64;
        let mut hi = upper;
        for _ in 0..200 {
            let mid = (lo + hi) / 2.0;
            if f(mid) <= 0.0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        (lo + hi) / 2.0
    }

    fn call_value(&self, strike: f64) -> f64 {
        let early_exercise_never_optimal =
            self.dividend_amount <= strike * (1.0 - (-self.rate * (self.expiry - self.dividend_time)).exp());
        let spot_ex_div = self.spot - self.dividend_amount * (-self.rate * self.dividend_time).exp();

        if early_exercise_never_optimal {
            return bs_price(
                spot_ex_div,
                strike,
                self.rate,
                self.rate,
                self.sigma,
                self.expiry,
                OptionStyle::Call,
            );
        }

        let critical = self.critical_price(strike);
        let sqrt_t = self.sigma * self.expiry.sqrt();
        let sqrt_td = self.sigma * self.dividend_time.sqrt();
        let a1 = ((spot_ex_div / strike).ln() + (self.rate + self.sigma * self.sigma / 2.0) * self.expiry)
            / sqrt_t;
        let a2 = a1 - sqrt_t;
        let b1 = ((spot_ex_div / critical).ln()
            + (self.rate + self.sigma * self.sigma / 2.0) * self.dividend_time)
            / sqrt_td;
        let b2 = b1 - sqrt_td;
        let rho = -(self.dividend_time / self.expiry).sqrt();

        spot_ex_div * big_n(b1) + spot_ex_div * big_n2(a1, -b1, rho)
            - strike * (-self.rate * self.expiry).exp() * big_n2(a2, -b2, rho)
            - (strike - self.dividend_amount) * (-self.rate * self.dividend_time).exp() * big_n(b2)
    }
}

impl PricingModel for RollGeskeWhaley {
    fn price(&self, strike: f64, style: OptionStyle) -> Result<f64, PricingError> {
        if style != OptionStyle::Call {
            return Err(PricingError::invalid_engine(
                "Roll-Geske-Whaley only prices calls; puts are unsupported",
            ));
        }
        let price = self.call_value(strike);
        if price.is_finite() {
            Ok(price)
        } else {
            Err(PricingError::non_finite("RollGeskeWhaley::price"))
        }
    }

    fn partials(&self, strike: f64, style: OptionStyle) -> Result<Greek, PricingError> {
        if style != OptionStyle::Call {
            return Err(PricingError::invalid_engine(
                "Roll-Geske-Whaley only prices calls; puts are unsupported",
            ));
        }
        finite_difference_greeks(self.spot, self.sigma, self.rate, self.expiry, |s, sigma, r, t| {
            let model = RollGeskeWhaley {
                spot: s,
                rate: r,
                sigma,
                expiry: t,
                dividend_time: self.dividend_time.min(t),
                dividend_amount: self.dividend_amount,
            };
            Ok(model.call_value(strike))
        })
    }

    fn vega(&self, strike: f64, style: OptionStyle) -> Result<f64, PricingError> {
        Ok(self.partials(strike, style)?.vega)
    }

    fn seed_sigma(&self, strike: f64) -> f64 {
        crate::pricing::manaster_koehler_seed(self.spot, strike, self.rate, self.expiry)
    }

    fn is_european(&self) -> bool {
        false
    }

    fn sigma(&self) -> f64 {
        self.sigma
    }

    fn with_sigma(&self, sigma: f64) -> Self {
        RollGeskeWhaley { sigma, ..*self }
    }
}
