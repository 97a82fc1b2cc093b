//! Monte Carlo pricing via Box-Muller-sampled terminal prices under the
//! risk-neutral GBM measure (`spec.md` §4.2). European-only: there is no
//! early-exercise boundary to estimate without a regression method this
//! model does not implement.
//!
//! The standard-normal draws are sampled once at construction and cached;
//! [`PricingModel::with_sigma`] reuses the same draws under the new sigma
//! rather than resampling, which is what keeps a Newton-Raphson implied-vol
//! search over this model from chasing simulation noise between iterations
//! (`spec.md` §9).

use crate::error::PricingError;
use crate::greeks::numerical::finite_diff_rho;
use crate::model::option::Greek;
use crate::model::types::OptionStyle;
use crate::pricing::PricingModel;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use std::f64::consts::PI;

#[derive(Debug, Clone)]
pub struct MonteCarlo {
    pub spot: f64,
    pub rate: f64,
    pub carry: f64,
    pub sigma: f64,
    pub time: f64,
    pub paths: usize,
    draws: std::sync::Arc<Vec<f64>>,
}

impl MonteCarlo {
    pub fn new(spot: f64, rate: f64, carry: f64, sigma: f64, time: f64, paths: usize, seed: u64) -> Self {
        let draws = std::sync::Arc::new(box_muller_draws(paths, seed));
        MonteCarlo {
            spot,
            rate,
            carry,
            sigma,
            time,
            paths,
            draws,
        }
    }

    fn terminal_price(&self, z: f64) -> f64 {
        self.spot * ((self.carry - 0.5 * self.sigma * self.sigma) * self.time + self.sigma * self.time.sqrt() * z).exp()
    }

    fn terminals(&self) -> impl Iterator<Item = f64> + '_ {
        self.draws.iter().map(move |z| self.terminal_price(*z))
    }

    fn discount(&self) -> f64 {
        (-self.rate * self.time).exp()
    }
}

fn box_muller_draws(paths: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut draws = Vec::with_capacity(paths);
    while draws.len() < paths {
        let u1: f64 = rng.random::<f64>().max(1e-12);
        let u2: f64 = rng.random::<f64>();
        let radius = (-2.0 * u1.ln()).sqrt();
        draws.push(radius * (2.0 * PI * u2).cos());
        if draws.len() < paths {
            draws.push(radius * (2.0 * PI * u2).sin());
        }
    }
    draws
}

impl PricingModel for MonteCarlo {
    fn price(&self, strike: f64, style: OptionStyle) -> Result<f64, PricingError> {
        let n = self.paths as f64;
        let sum: f64 = self
            .terminals()
            .map(|s_t| match style {
                OptionStyle::Call => (s_t - strike).max(0.0),
                OptionStyle::Put => (strike - s_t).max(0.0),
            })
            .sum();
        let price = self.discount() * sum / n;
        if price.is_finite() {
            Ok(price)
        } else {
            Err(PricingError::non_finite("MonteCarlo::price"))
        }
    }

    fn partials(&self, strike: f64, style: OptionStyle) -> Result<Greek, PricingError> {
        let discount = self.discount();
        let n = self.paths as f64;
        let sign = match style {
            OptionStyle::Call => 1.0,
            OptionStyle::Put => -1.0,
        };

        // Pathwise delta: d(payoff)/dS_T * dS_T/dS_0 = 1{exercised} * S_T / S_0.
        let exercised_weighted_sum: f64 = self
            .terminals()
            .map(|s_t| {
                let exercised = match style {
                    OptionStyle::Call => s_t > strike,
                    OptionStyle::Put => s_t < strike,
                };
                if exercised { s_t / self.spot } else { 0.0 }
            })
            .sum();
        let delta = sign * discount * exercised_weighted_sum / n;

        // Gamma proxy: local density of terminal prices near the strike.
        let band = 2.0;
        let near_strike = self.terminals().filter(|s_t| (s_t - strike).abs() < band).count() as f64;
        let density = near_strike / (n * 2.0 * band);
        let gamma = discount * density * (strike * strike) / (self.spot * self.spot);

        let price = self.price(strike, style)?;
        let theta = self.rate * price - self.carry * self.spot * delta - 0.5 * self.sigma * self.sigma * self.spot * self.spot * gamma;
        let vega = gamma * self.sigma * self.spot * self.spot * self.time;

        let rho = finite_diff_rho(price, |bump| {
            let bumped = MonteCarlo {
                rate: self.rate + bump,
                draws: self.draws.clone(),
                ..*self
            };
            bumped.price(strike, style)
        })?;

        let greek = Greek {
            delta,
            gamma,
            theta,
            vega,
            rho,
        };
        if [greek.delta, greek.gamma, greek.theta, greek.vega, greek.rho]
            .iter()
            .all(|v| v.is_finite())
        {
            Ok(greek)
        } else {
            Err(PricingError::non_finite("MonteCarlo::partials"))
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
        MonteCarlo {
            sigma,
            draws: self.draws.clone(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::black_scholes::GeneralizedBlackScholes;
    use approx::assert_relative_eq;

    #[test]
    fn converges_towards_black_scholes() {
        let mc = MonteCarlo::new(100.0, 0.05, 0.05, 0.2, 0.5, 200_000, 42);
        let bs = GeneralizedBlackScholes::new(100.0, 0.05, 0.05, 0.2, 0.5);
        let mc_price = mc.price(100.0, OptionStyle::Call).unwrap();
        let bs_price = bs.price(100.0, OptionStyle::Call).unwrap();
        assert_relative_eq!(mc_price, bs_price, epsilon = 0.2);
    }

    #[test]
    fn with_sigma_reuses_draws() {
        let mc = MonteCarlo::new(100.0, 0.05, 0.05, 0.2, 0.5, 1000, 7);
        let bumped = mc.with_sigma(0.25);
        assert!(std::sync::Arc::ptr_eq(&mc.draws, &bumped.draws));
    }

    #[test]
    fn put_price_is_nonnegative() {
        let mc = MonteCarlo::new(100.0, 0.05, 0.0, 0.3, 1.0, 5000, 11);
        let price = mc.price(110.0, OptionStyle::Put).unwrap();
        assert!(price >= 0.0);
    }
}
