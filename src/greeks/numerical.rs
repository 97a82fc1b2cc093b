//! Finite-difference Greeks for models with no closed form: the lattice
//! family and Monte-Carlo (`spec.md` §4.2/§9 "Greek finite differences").
//!
//! `rho` and `vega` for these models are obtained by constructing a second,
//! perturbed model instance and differencing against it — `spec.md` §9 notes
//! this requires model construction to stay cheap, which is why lattice
//! models cache `u`/`d`/`p_u`/`p_d`/`Df` and only rebuild the payoff layer via
//! [`crate::pricing::PricingModel::with_sigma`] rather than the whole tree
//! shape.

use crate::constants::{RHO_BUMP, VEGA_BUMP};
use crate::error::PricingError;
use crate::model::types::OptionStyle;

/// One-sided finite-difference vega: `(price(sigma + bump) - price(sigma)) / bump`.
///
/// `reprice` is supplied by the caller as a closure over a freshly
/// constructed model at the bumped sigma, since the bump amount and the
/// model's own constructor arguments vary per pricing family.
pub fn finite_diff_vega<F>(base_price: f64, reprice_bumped: F) -> Result<f64, PricingError>
where
    F: FnOnce(f64) -> Result<f64, PricingError>,
{
    let bumped = reprice_bumped(VEGA_BUMP)?;
    let vega = (bumped - base_price) / VEGA_BUMP;
    if vega.is_finite() {
        Ok(vega)
    } else {
        Err(PricingError::non_finite("finite_diff_vega"))
    }
}

/// One-sided finite-difference rho: `(price(r + bump) - price(r)) / bump`.
pub fn finite_diff_rho<F>(base_price: f64, reprice_bumped: F) -> Result<f64, PricingError>
where
    F: FnOnce(f64) -> Result<f64, PricingError>,
{
    let bumped = reprice_bumped(RHO_BUMP)?;
    let rho = (bumped - base_price) / RHO_BUMP;
    if rho.is_finite() {
        Ok(rho)
    } else {
        Err(PricingError::non_finite("finite_diff_rho"))
    }
}

/// Central-difference Greeks for cheap-to-reprice American approximations
/// (Barone-Adesi-Whaley, Bjerksund-Stensland, Roll-Geske-Whaley) that have
/// no closed-form sensitivity formulas of their own: bump spot/sigma/rate by
/// a small relative step and reprice, rather than differentiate the
/// early-exercise boundary analytically.
pub fn finite_difference_greeks<F>(
    spot: f64,
    sigma: f64,
    rate: f64,
    time: f64,
    mut reprice: F,
) -> Result<crate::model::option::Greek, PricingError>
where
    F: FnMut(f64, f64, f64, f64) -> Result<f64, PricingError>,
{
    let h_s = spot * 1e-4;
    let h_sigma = 1e-4;
    let h_r = 1e-4;
    let h_t = (time * 1e-4).max(1e-6);

    let base = reprice(spot, sigma, rate, time)?;
    let up_s = reprice(spot + h_s, sigma, rate, time)?;
    let down_s = reprice(spot - h_s, sigma, rate, time)?;
    let up_sigma = reprice(spot, sigma + h_sigma, rate, time)?;
    let up_r = reprice(spot, sigma, rate + h_r, time)?;
    let down_t = reprice(spot, sigma, rate, (time - h_t).max(1e-8))?;

    let delta = (up_s - down_s) / (2.0 * h_s);
    let gamma = (up_s - 2.0 * base + down_s) / (h_s * h_s);
    let vega = (up_sigma - base) / h_sigma;
    let rho = (up_r - base) / h_r;
    let theta = (down_t - base) / h_t;

    let greek = crate::model::option::Greek {
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
        Err(PricingError::non_finite("finite_difference_greeks"))
    }
}

/// Delta/gamma/theta extracted directly from a backward-induction lattice:
/// delta from the two nodes adjacent to the root at level 1, gamma from the
/// three nodes at level 2, theta from the level-2 middle node versus the
/// root (`spec.md` §4.2 CRR binomial paragraph).
pub struct LatticeRootGreeks {
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
}

/// `values_level0` is the single root value; `values_level1` the two nodes
/// one step forward; `values_level2` the three nodes two steps forward.
/// `spot_level1`/`spot_level2` are the corresponding underlying prices, and
/// `dt` is the per-step time increment.
#[allow(clippy::too_many_arguments)]
pub fn lattice_root_greeks(
    root_value: f64,
    level1: (f64, f64),
    level1_spot: (f64, f64),
    level2: (f64, f64, f64),
    level2_spot: (f64, f64, f64),
    dt: f64,
    style: OptionStyle,
) -> LatticeRootGreeks {
    let _ = style;
    let (v1_down, v1_up) = level1;
    let (s1_down, s1_up) = level1_spot;
    let delta = (v1_up - v1_down) / (s1_up - s1_down);

    let (v2_down, v2_mid, v2_up) = level2;
    let (s2_down, s2_mid, s2_up) = level2_spot;
    let gamma = ((v2_up - v2_mid) / (s2_up - s2_mid) - (v2_down - v2_mid) / (s2_mid - s2_down))
        / ((s2_up - s2_down) / 2.0);
    let _ = s2_mid;

    let theta = (v2_mid - root_value) / (2.0 * dt);

    LatticeRootGreeks { delta, gamma, theta }
}
