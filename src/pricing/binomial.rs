//! Binomial lattices: Cox-Ross-Rubinstein and the equal-probability variant
//! (`spec.md` §4.2, `SPEC_FULL.md` §4.2 "equal-probability binomial
//! variant"). Both share one backward-induction walk; they differ only in
//! how `u`/`d`/`p_u`/`p_d` are derived from `sigma`.

use crate::error::PricingError;
use crate::greeks::numerical::{LatticeRootGreeks, finite_diff_rho, finite_diff_vega, lattice_root_greeks};
use crate::model::option::{DividendEvent, Greek};
use crate::model::types::OptionStyle;
use crate::pricing::PricingModel;

#[derive(Debug, Clone, Copy)]
enum Variant {
    Crr,
    EqualProbability,
}

/// A Cox-Ross-Rubinstein or equal-probability binomial lattice, optionally
/// carrying a discrete-dividend schedule (escrowed-dividend method: the
/// lattice is built on `S - PV(future dividends)`, with the remaining
/// dividend PV added back at each node before the early-exercise test).
#[derive(Debug, Clone)]
pub struct BinomialTree {
    pub spot: f64,
    pub rate: f64,
    pub carry: f64,
    pub sigma: f64,
    pub time: f64,
    pub depth: usize,
    pub american: bool,
    pub dividends: Vec<DividendEvent>,
    variant: Variant,
}

struct LatticeOutcome {
    price: f64,
    root_greeks: LatticeRootGreeks,
}

impl BinomialTree {
    pub fn crr(
        spot: f64,
        rate: f64,
        carry: f64,
        sigma: f64,
        time: f64,
        depth: usize,
        american: bool,
        dividends: Vec<DividendEvent>,
    ) -> Self {
        BinomialTree {
            spot,
            rate,
            carry,
            sigma,
            time,
            depth,
            american,
            dividends,
            variant: Variant::Crr,
        }
    }

    pub fn equal_probability(
        spot: f64,
        rate: f64,
        carry: f64,
        sigma: f64,
        time: f64,
        depth: usize,
        american: bool,
        dividends: Vec<DividendEvent>,
    ) -> Self {
        BinomialTree {
            spot,
            rate,
            carry,
            sigma,
            time,
            depth,
            american,
            dividends,
            variant: Variant::EqualProbability,
        }
    }

    fn escrowed_spot(&self) -> f64 {
        self.spot
            - self
                .dividends
                .iter()
                .map(|(t, d)| d.to_f64() * (-self.rate * t.to_f64()).exp())
                .sum::<f64>()
    }

    fn remaining_dividend_pv(&self, time_at_level: f64) -> f64 {
        self.dividends
            .iter()
            .filter(|(t, _)| t.to_f64() > time_at_level)
            .map(|(t, d)| d.to_f64() * (-self.rate * (t.to_f64() - time_at_level)).exp())
            .sum()
    }

    fn step_parameters(&self, dt: f64) -> (f64, f64, f64, f64) {
        match self.variant {
            Variant::Crr => {
                let u = (self.sigma * dt.sqrt()).exp();
                let d = 1.0 / u;
                let p_u = ((self.carry * dt).exp() - d) / (u - d);
                (u, d, p_u, 1.0 - p_u)
            }
            Variant::EqualProbability => {
                let drift = (self.carry - self.sigma * self.sigma / 2.0) * dt;
                let diffusion = self.sigma * dt.sqrt();
                let u = (drift + diffusion).exp();
                let d = (drift - diffusion).exp();
                (u, d, 0.5, 0.5)
            }
        }
    }

    fn walk(&self, strike: f64, style: OptionStyle) -> Result<LatticeOutcome, PricingError> {
        if self.depth < 2 {
            return Err(PricingError::invalid_engine("lattice depth must be >= 2"));
        }
        let n = self.depth;
        let dt = self.time / n as f64;
        let (u, d, p_u, p_d) = self.step_parameters(dt);
        let discount = (-self.rate * dt).exp();
        let escrowed = self.escrowed_spot();

        let intrinsic = |escrowed_spot_at_node: f64, level: usize| -> f64 {
            let actual = escrowed_spot_at_node + self.remaining_dividend_pv(level as f64 * dt);
            match style {
                OptionStyle::Call => (actual - strike).max(0.0),
                OptionStyle::Put => (strike - actual).max(0.0),
            }
        };

        let mut values: Vec<f64> = (0..=n)
            .map(|i| intrinsic(escrowed * u.powi(i as i32) * d.powi((n - i) as i32), n))
            .collect();

        let mut level1: Option<(f64, f64)> = None;
        let mut level1_spot: Option<(f64, f64)> = None;
        let mut level2: Option<(f64, f64, f64)> = None;
        let mut level2_spot: Option<(f64, f64, f64)> = None;

        for level in (0..n).rev() {
            let mut next = Vec::with_capacity(level + 1);
            for i in 0..=level {
                let continuation = discount * (p_u * values[i + 1] + p_d * values[i]);
                let value = if self.american {
                    let node_spot = escrowed * u.powi(i as i32) * d.powi((level - i) as i32);
                    continuation.max(intrinsic(node_spot, level))
                } else {
                    continuation
                };
                next.push(value);
            }
            if level == 2 {
                level2 = Some((next[0], next[1], next[2]));
                level2_spot = Some((
                    escrowed * u.powi(0) * d.powi(2),
                    escrowed * u.powi(1) * d.powi(1),
                    escrowed * u.powi(2) * d.powi(0),
                ));
            }
            if level == 1 {
                level1 = Some((next[0], next[1]));
                level1_spot = Some((escrowed * d, escrowed * u));
            }
            values = next;
        }

        let price = values[0];
        if !price.is_finite() {
            return Err(PricingError::non_finite("BinomialTree::walk"));
        }

        let root_greeks = match (level1, level1_spot, level2, level2_spot) {
            (Some(l1), Some(l1s), Some(l2), Some(l2s)) => {
                lattice_root_greeks(price, l1, l1s, l2, l2s, dt, style)
            }
            _ => LatticeRootGreeks {
                delta: f64::NAN,
                gamma: f64::NAN,
                theta: f64::NAN,
            },
        };

        Ok(LatticeOutcome { price, root_greeks })
    }
}

impl PricingModel for BinomialTree {
    fn price(&self, strike: f64, style: OptionStyle) -> Result<f64, PricingError> {
        Ok(self.walk(strike, style)?.price)
    }

    fn partials(&self, strike: f64, style: OptionStyle) -> Result<Greek, PricingError> {
        let outcome = self.walk(strike, style)?;
        let vega = finite_diff_vega(outcome.price, |bump| {
            let bumped = BinomialTree {
                sigma: self.sigma + bump,
                ..self.clone()
            };
            bumped.price(strike, style)
        })?;
        let rho = finite_diff_rho(outcome.price, |bump| {
            let bumped = BinomialTree {
                rate: self.rate + bump,
                ..self.clone()
            };
            bumped.price(strike, style)
        })?;
        Ok(Greek {
            delta: outcome.root_greeks.delta,
            gamma: outcome.root_greeks.gamma,
            theta: outcome.root_greeks.theta,
            vega,
            rho,
        })
    }

    fn vega(&self, strike: f64, style: OptionStyle) -> Result<f64, PricingError> {
        Ok(self.partials(strike, style)?.vega)
    }

    fn seed_sigma(&self, strike: f64) -> f64 {
        crate::pricing::manaster_koehler_seed(self.spot, strike, self.rate, self.time)
    }

    fn is_european(&self) -> bool {
        !self.american
    }

    fn sigma(&self) -> f64 {
        self.sigma
    }

    fn with_sigma(&self, sigma: f64) -> Self {
        BinomialTree {
            sigma,
            ..self.clone()
        }
    }
}
