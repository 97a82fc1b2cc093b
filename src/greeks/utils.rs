//! Shared Black-Scholes-family intermediates (`d1`, `d2`) and the generalized
//! closed-form Greek formulas built on them (`spec.md` §4.2 "Generalized
//! Black-Scholes").
//!
//! These are reused directly by [`crate::pricing::black_scholes`] and, via
//! the European/American dispatch described in `spec.md` §4.2, by
//! Barone-Adesi-Whaley's European fallback when `r <= b`.

use crate::model::option::Greek;
use crate::model::types::OptionStyle;

/// `d1 = (ln(S/K) + (b + sigma^2/2)T) / (sigma sqrt(T))`.
pub fn d1(spot: f64, strike: f64, carry: f64, sigma: f64, time: f64) -> f64 {
    ((spot / strike).ln() + (carry + sigma * sigma / 2.0) * time) / (sigma * time.sqrt())
}

/// `d2 = d1 - sigma sqrt(T)`.
pub fn d2(d1_value: f64, sigma: f64, time: f64) -> f64 {
    d1_value - sigma * time.sqrt()
}

/// Closed-form price for the generalized Black-Scholes model, shared between
/// [`crate::pricing::black_scholes::GeneralizedBlackScholes`] and any
/// American model that falls back to its European value.
#[allow(clippy::too_many_arguments)]
pub fn bs_price(
    spot: f64,
    strike: f64,
    rate: f64,
    carry: f64,
    sigma: f64,
    time: f64,
    style: OptionStyle,
) -> f64 {
    let d1v = d1(spot, strike, carry, sigma, time);
    let d2v = d2(d1v, sigma, time);
    let carry_factor = ((carry - rate) * time).exp();
    let discount = (-rate * time).exp();
    match style {
        OptionStyle::Call => {
            spot * carry_factor * crate::distributions::big_n(d1v)
                - strike * discount * crate::distributions::big_n(d2v)
        }
        OptionStyle::Put => {
            strike * discount * crate::distributions::big_n(-d2v)
                - spot * carry_factor * crate::distributions::big_n(-d1v)
        }
    }
}

/// Closed-form Greeks for the generalized Black-Scholes model (`spec.md` §4.2).
#[allow(clippy::too_many_arguments)]
pub fn bs_greeks(
    spot: f64,
    strike: f64,
    rate: f64,
    carry: f64,
    sigma: f64,
    time: f64,
    style: OptionStyle,
) -> Greek {
    use crate::distributions::{big_n, phi_density};

    let d1v = d1(spot, strike, carry, sigma, time);
    let d2v = d2(d1v, sigma, time);
    let carry_factor = ((carry - rate) * time).exp();
    let discount = (-rate * time).exp();
    let sign = match style {
        OptionStyle::Call => 1.0,
        OptionStyle::Put => -1.0,
    };

    let delta = sign * carry_factor * big_n(sign * d1v);
    let gamma = carry_factor * phi_density(d1v) / (spot * sigma * time.sqrt());
    let vega = spot * carry_factor * phi_density(d1v) * time.sqrt();
    let rho = sign * time * strike * discount * big_n(sign * d2v);
    let theta = -spot * carry_factor * phi_density(d1v) * sigma / (2.0 * time.sqrt())
        - sign * (carry - rate) * spot * carry_factor * big_n(sign * d1v)
        - sign * rate * strike * discount * big_n(sign * d2v);

    Greek {
        delta,
        gamma,
        theta,
        vega,
        rho,
    }
}
