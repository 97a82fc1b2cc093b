//! Implied-volatility solvers (C3): Newton-Raphson primary, strict bisection
//! fallback, and an exhaustive alternative bisection that sweeps the sigma
//! axis to escape local degeneracy (`spec.md` §4.3).
//!
//! All three share the contract `solve(model, strike, style, target) -> σ`,
//! returning [`VolatilityError`] rather than the original's `(σ, ok)` pair.

use crate::constants::{
    ALT_BISECTION_ERR, ALT_BISECTION_MAX_LOOPS, BISECTION_EPSILON, BISECTION_VOL_MAX, BISECTION_VOL_MIN,
    NEWTON_EPSILON, NEWTON_VOL_MAX, NEWTON_VOL_MIN,
};
use crate::error::VolatilityError;
use crate::model::positive::Positive;
use crate::model::types::OptionStyle;
use crate::pricing::PricingModel;

/// Common contract for the three IV-recovery strategies `spec.md` §4.3 asks for.
pub trait VolatilitySolver {
    fn solve<M: PricingModel>(
        &self,
        model: &M,
        strike: f64,
        style: OptionStyle,
        target: f64,
    ) -> Result<f64, VolatilityError>;
}

fn price_at<M: PricingModel>(model: &M, sigma: f64, strike: f64, style: OptionStyle) -> Result<f64, VolatilityError> {
    Ok(model.with_sigma(sigma).price(strike, style)?)
}

fn vega_at<M: PricingModel>(model: &M, sigma: f64, strike: f64, style: OptionStyle) -> Result<f64, VolatilityError> {
    Ok(model.with_sigma(sigma).vega(strike, style)?)
}

/// Newton-Raphson from the model's Manaster-Koehler seed, no iteration cap:
/// divergence is caught by escaping `(NEWTON_VOL_MIN, NEWTON_VOL_MAX)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonRaphson;

impl VolatilitySolver for NewtonRaphson {
    fn solve<M: PricingModel>(
        &self,
        model: &M,
        strike: f64,
        style: OptionStyle,
        target: f64,
    ) -> Result<f64, VolatilityError> {
        let mut sigma = model.seed_sigma(strike);
        loop {
            if !(NEWTON_VOL_MIN..NEWTON_VOL_MAX).contains(&sigma) {
                return Err(VolatilityError::NewtonDiverged {
                    seed: Positive::from_f64(model.seed_sigma(strike)).unwrap_or(Positive::ZERO),
                    reason: format!("sigma {sigma} escaped ({NEWTON_VOL_MIN}, {NEWTON_VOL_MAX})"),
                });
            }
            let price = price_at(model, sigma, strike, style)?;
            let diff = price - target;
            if diff.abs() <= NEWTON_EPSILON {
                return Ok(sigma);
            }
            let vega = vega_at(model, sigma, strike, style)?;
            if vega.abs() < 1e-12 {
                return Err(VolatilityError::NewtonDiverged {
                    seed: Positive::from_f64(model.seed_sigma(strike)).unwrap_or(Positive::ZERO),
                    reason: "vega underflowed".to_string(),
                });
            }
            sigma -= diff / vega;
        }
    }
}

/// Strict bisection: requires `target` to lie inside
/// `[price(BISECTION_VOL_MIN), price(BISECTION_VOL_MAX)]`, then narrows via
/// regula-falsi (linear interpolation between the bracketing endpoints).
#[derive(Debug, Clone, Copy, Default)]
pub struct Bisection;

impl VolatilitySolver for Bisection {
    fn solve<M: PricingModel>(
        &self,
        model: &M,
        strike: f64,
        style: OptionStyle,
        target: f64,
    ) -> Result<f64, VolatilityError> {
        let mut lo = BISECTION_VOL_MIN;
        let mut hi = BISECTION_VOL_MAX;
        let mut lo_price = price_at(model, lo, strike, style)?;
        let mut hi_price = price_at(model, hi, strike, style)?;

        if (target - lo_price) * (target - hi_price) > 0.0 {
            return Err(VolatilityError::NotBracketed {
                target,
                low: lo_price,
                high: hi_price,
            });
        }

        for _ in 0..200 {
            if (hi_price - lo_price).abs() < 1e-15 {
                break;
            }
            let candidate = lo + (target - lo_price) * (hi - lo) / (hi_price - lo_price);
            let candidate = candidate.clamp(lo, hi);
            let candidate_price = price_at(model, candidate, strike, style)?;
            if (candidate_price - target).abs() <= BISECTION_EPSILON {
                return Ok(candidate);
            }
            if (candidate_price - target) * (lo_price - target) > 0.0 {
                lo = candidate;
                lo_price = candidate_price;
            } else {
                hi = candidate;
                hi_price = candidate_price;
            }
        }
        Ok((lo + hi) / 2.0)
    }
}

/// Exhaustive alternative bisection: one more Newton attempt from the seed,
/// then a geometric sweep of the whole sigma axis (step `0.1` below 1,
/// `1.0` below 10, `10.0` above) with a slope-guarded inner bisection run on
/// whichever sweep interval brackets `target`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlternativeBisection;

impl VolatilitySolver for AlternativeBisection {
    fn solve<M: PricingModel>(
        &self,
        model: &M,
        strike: f64,
        style: OptionStyle,
        target: f64,
    ) -> Result<f64, VolatilityError> {
        if let Ok(sigma) = NewtonRaphson.solve(model, strike, style, target) {
            return Ok(sigma);
        }

        let mut sigma_prev = BISECTION_VOL_MIN;
        let mut price_prev = price_at(model, sigma_prev, strike, style)?;
        let mut sigma = sigma_prev;

        while sigma < BISECTION_VOL_MAX - ALT_BISECTION_ERR {
            let step = if sigma < 1.0 {
                0.1
            } else if sigma < 10.0 {
                1.0
            } else {
                10.0
            };
            sigma = (sigma + step).min(BISECTION_VOL_MAX);
            let price = price_at(model, sigma, strike, style)?;

            if (price_prev - target) * (price - target) <= 0.0 {
                let mut lo = sigma_prev;
                let mut hi = sigma;
                let mut lo_price = price_prev;
                for _ in 0..ALT_BISECTION_MAX_LOOPS {
                    let mid = (lo + hi) / 2.0;
                    let mid_price = price_at(model, mid, strike, style)?;
                    if (mid_price - target).abs() <= ALT_BISECTION_ERR {
                        return Ok(mid);
                    }
                    if (lo_price - target) * (mid_price - target) <= 0.0 {
                        hi = mid;
                    } else {
                        lo = mid;
                        lo_price = mid_price;
                    }
                }
                return Ok((lo + hi) / 2.0);
            }
            sigma_prev = sigma;
            price_prev = price;
        }

        Err(VolatilityError::SweepExhausted)
    }
}
