//! Trinomial lattices: Phelim Boyle's three-jump tree and the alternative
//! (Kamrad-Ritchken) parameterization (`spec.md` §4.2).

use crate::error::PricingError;
use crate::greeks::numerical::{LatticeRootGreeks, finite_diff_rho, finite_diff_vega, lattice_root_greeks};
use crate::model::option::Greek;
use crate::model::types::OptionStyle;
use crate::pricing::PricingModel;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Variant {
    PhelimBoyle,
    Alternative,
}

/// A Phelim Boyle or Kamrad-Ritchken trinomial lattice for American/European
/// pricing. Unlike [`crate::pricing::binomial::BinomialTree`], no discrete
/// dividend schedule is carried — `spec.md` §4.2 does not ask the trinomial
/// family to support one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrinomialTree {
    pub spot: f64,
    pub rate: f64,
    pub carry: f64,
    pub sigma: f64,
    pub time: f64,
    pub depth: usize,
    pub american: bool,
    variant: Variant,
}

struct LatticeOutcome {
    price: f64,
    root_greeks: LatticeRootGreeks,
}

impl TrinomialTree {
    pub fn phelim_boyle(spot: f64, rate: f64, carry: f64, sigma: f64, time: f64, depth: usize, american: bool) -> Self {
        TrinomialTree {
            spot,
            rate,
            carry,
            sigma,
            time,
            depth,
            american,
            variant: Variant::PhelimBoyle,
        }
    }

    pub fn alternative(spot: f64, rate: f64, carry: f64, sigma: f64, time: f64, depth: usize, american: bool) -> Self {
        TrinomialTree {
            spot,
            rate,
            carry,
            sigma,
            time,
            depth,
            american,
            variant: Variant::Alternative,
        }
    }

    /// `(u, d, p_u, p_m, p_d)` for the chosen variant. Phelim Boyle uses
    /// `u = e^{sigma*sqrt(2*dt)}` with the squared-ratio probability
    /// `p_u = ((e^{b*dt/2} - e^{-sigma*sqrt(dt/2)}) / (e^{sigma*sqrt(dt/2)} - e^{-sigma*sqrt(dt/2)}))^2`;
    /// the alternative (Kamrad-Ritchken) parameterization uses
    /// `u = e^{sigma*sqrt(3*dt)}` with `p_u = 1/6 + (b - sigma^2/2)*sqrt(dt/(12*sigma^2))`,
    /// `p_m = 2/3`.
    fn step_parameters(&self, dt: f64) -> (f64, f64, f64, f64, f64) {
        match self.variant {
            Variant::PhelimBoyle => {
                let u = (self.sigma * (2.0 * dt).sqrt()).exp();
                let d = 1.0 / u;
                let half_vol_dt = (self.sigma * (dt / 2.0).sqrt()).exp();
                let inv_half_vol_dt = 1.0 / half_vol_dt;
                let drift_half = (self.carry * dt / 2.0).exp();
                let denom = half_vol_dt - inv_half_vol_dt;
                let p_u = ((drift_half - inv_half_vol_dt) / denom).powi(2);
                let p_d = ((half_vol_dt - drift_half) / denom).powi(2);
                let p_m = (1.0 - p_u - p_d).max(0.0);
                (u, d, p_u, p_m, p_d)
            }
            Variant::Alternative => {
                let u = (self.sigma * (3.0 * dt).sqrt()).exp();
                let d = 1.0 / u;
                let drift = self.carry - self.sigma * self.sigma / 2.0;
                let spread = drift * (dt / (12.0 * self.sigma * self.sigma)).sqrt();
                let p_u = 1.0 / 6.0 + spread;
                let p_d = 1.0 / 6.0 - spread;
                let p_m = 2.0 / 3.0;
                (u, d, p_u, p_m, p_d)
            }
        }
    }

    fn walk(&self, strike: f64, style: OptionStyle) -> Result<LatticeOutcome, PricingError> {
        if self.depth < 2 {
            return Err(PricingError::invalid_engine("lattice depth must be >= 2"));
        }
        let n = self.depth;
        let dt = self.time / n as f64;
        let (u, d, p_u, p_m, p_d) = self.step_parameters(dt);
        let discount = (-self.rate * dt).exp();

        let node_spot = |level: usize, i: i64| -> f64 {
            // i ranges over [-level, level]; spot_i = S * u^i (d = 1/u).
            self.spot * u.powi(i as i32)
        };

        let intrinsic = |spot_at_node: f64| -> f64 {
            match style {
                OptionStyle::Call => (spot_at_node - strike).max(0.0),
                OptionStyle::Put => (strike - spot_at_node).max(0.0),
            }
        };
        let _ = d;

        // Nodes at level k run from i = -k to i = k (2k + 1 nodes), indexed 0..=2k.
        let mut values: Vec<f64> = (0..=(2 * n))
            .map(|idx| intrinsic(node_spot(n, idx as i64 - n as i64)))
            .collect();

        let mut level1: Option<(f64, f64)> = None;
        let mut level1_spot: Option<(f64, f64)> = None;
        let mut level2: Option<(f64, f64, f64)> = None;
        let mut level2_spot: Option<(f64, f64, f64)> = None;

        for level in (0..n).rev() {
            let mut next = Vec::with_capacity(2 * level + 1);
            for idx in 0..=(2 * level) {
                // node idx at this level connects to (idx, idx+1, idx+2) at level+1.
                let continuation = discount * (p_d * values[idx] + p_m * values[idx + 1] + p_u * values[idx + 2]);
                let value = if self.american {
                    let i = idx as i64 - level as i64;
                    continuation.max(intrinsic(node_spot(level, i)))
                } else {
                    continuation
                };
                next.push(value);
            }
            if level == 2 {
                level2 = Some((next[0], next[2], next[4]));
                level2_spot = Some((node_spot(2, -2), node_spot(2, 0), node_spot(2, 2)));
            }
            if level == 1 {
                level1 = Some((next[0], next[2]));
                level1_spot = Some((node_spot(1, -1), node_spot(1, 1)));
            }
            values = next;
        }

        let price = values[0];
        if !price.is_finite() {
            return Err(PricingError::non_finite("TrinomialTree::walk"));
        }

        let root_greeks = match (level1, level1_spot, level2, level2_spot) {
            (Some(l1), Some(l1s), Some(l2), Some(l2s)) => lattice_root_greeks(price, l1, l1s, l2, l2s, dt, style),
            _ => LatticeRootGreeks {
                delta: f64::NAN,
                gamma: f64::NAN,
                theta: f64::NAN,
            },
        };

        Ok(LatticeOutcome { price, root_greeks })
    }
}

impl PricingModel for TrinomialTree {
    fn price(&self, strike: f64, style: OptionStyle) -> Result<f64, PricingError> {
        Ok(self.walk(strike, style)?.price)
    }

    fn partials(&self, strike: f64, style: OptionStyle) -> Result<Greek, PricingError> {
        let outcome = self.walk(strike, style)?;
        let vega = finite_diff_vega(outcome.price, |bump| {
            let bumped = TrinomialTree {
                sigma: self.sigma + bump,
                ..*self
            };
            bumped.price(strike, style)
        })?;
        let rho = finite_diff_rho(outcome.price, |bump| {
            let bumped = TrinomialTree {
                rate: self.rate + bump,
                ..*self
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
        TrinomialTree { sigma, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn scenario_s7_american_call() {
        // spec.md S7: PhelimBoyle(N=100): S=30, K=29, r=0.05, b=0.025, sigma=0.3, T=1,
        // American Call -> 4.2918
        let model = TrinomialTree::phelim_boyle(30.0, 0.05, 0.025, 0.3, 1.0, 100, true);
        let price = model.price(29.0, OptionStyle::Call).unwrap();
        assert_relative_eq!(price, 4.2918, epsilon = 5e-2);
    }

    #[test]
    fn converges_to_black_scholes_for_european() {
        use crate::pricing::black_scholes::GeneralizedBlackScholes;
        let lattice = TrinomialTree::phelim_boyle(100.0, 0.05, 0.05, 0.2, 0.5, 400, false);
        let bs = GeneralizedBlackScholes::new(100.0, 0.05, 0.05, 0.2, 0.5);
        let lattice_price = lattice.price(100.0, OptionStyle::Call).unwrap();
        let bs_price = bs.price(100.0, OptionStyle::Call).unwrap();
        assert_relative_eq!(lattice_price, bs_price, epsilon = 2e-2);
    }

    #[test]
    fn american_dominates_european_alternative_variant() {
        let american = TrinomialTree::alternative(50.0, 0.05, 0.0, 0.3, 2.0, 150, true);
        let european = TrinomialTree::alternative(50.0, 0.05, 0.0, 0.3, 2.0, 150, false);
        let american_price = american.price(55.0, OptionStyle::Put).unwrap();
        let european_price = european.price(55.0, OptionStyle::Put).unwrap();
        assert!(american_price >= european_price - 1e-9);
    }
}
