//! Expected-value analyzer (C5): drives the pricing family (C2) and the IV
//! solvers (C3) over every chain row, builds a risk-neutral probability
//! curve, and scores single-leg and vertical-spread strategies
//! (`spec.md` §4.5).

use crate::chain::{ChainRow, ResultRow, StrategyTag};
use crate::config::Config;
use crate::distributions::big_n;
use crate::error::AnalyzerError;
use crate::greeks::utils::{d1, d2};
use crate::model::option::Greek;
use crate::model::types::OptionStyle;
use crate::pricing::PricingModel;
use crate::volatility::VolatilitySolver;
use num_traits::ToPrimitive;

/// Per-strike/side Greek snapshot produced by [`generate_greeks`]
/// (`spec.md` §3 "OptionGreeksRecord").
#[derive(Debug, Clone, PartialEq)]
pub struct OptionGreeksRecord {
    pub strike: f64,
    pub style: OptionStyle,
    pub bid: Option<(f64, f64)>,
    pub ask: Option<(f64, f64)>,
    pub mark: (f64, f64),
    pub spread: f64,
    pub spread_pct: f64,
    pub theoretical_price: f64,
    pub greeks: Greek,
    pub time: f64,
    pub rate: f64,
}

/// Greek generation (`spec.md` §4.5.1): for every chain row, recover sigma
/// from each of bid/ask/mark via `solver`, keeping the row only if the mark
/// converges (a bid/ask failure just omits that component).
pub fn generate_greeks<M, V>(
    rows: &[ChainRow],
    make_model: impl Fn(f64) -> Result<M, crate::error::PricingError>,
    solver: &V,
) -> Vec<OptionGreeksRecord>
where
    M: PricingModel,
    V: VolatilitySolver,
{
    rows.iter()
        .filter_map(|row| {
            let time = (row.days_to_expiry / 365.0).max(1e-8);
            let model = make_model(time).ok()?;

            let mark = row.mark?;
            let mark_sigma = solver.solve(&model, row.strike, row.style, mark).ok()?;
            if !mark_sigma.is_finite() || mark_sigma <= 0.0 {
                return None;
            }

            let bid = row
                .bid
                .and_then(|price| solver.solve(&model, row.strike, row.style, price).ok().map(|s| (price, s)));
            let ask = row
                .ask
                .and_then(|price| solver.solve(&model, row.strike, row.style, price).ok().map(|s| (price, s)));

            let priced = model.with_sigma(mark_sigma);
            let theoretical_price = priced.price(row.strike, row.style).ok()?;
            let greeks = priced.partials(row.strike, row.style).ok()?;

            let spread = match (row.bid, row.ask) {
                (Some(b), Some(a)) => a - b,
                _ => 0.0,
            };
            let spread_pct = if mark != 0.0 { spread / mark } else { 0.0 };

            Some(OptionGreeksRecord {
                strike: row.strike,
                style: row.style,
                bid,
                ask,
                mark: (mark, mark_sigma),
                spread,
                spread_pct,
                theoretical_price,
                greeks,
                time,
                rate: 0.0,
            })
        })
        .collect()
}

/// Risk-neutral cumulative-probability curve: one `(strike, P(S_T <= strike))`
/// pair per converged record, monotonized by ascending-strike clamping
/// (`spec.md` §4.5.2, canonical single-pass resolution per `SPEC_FULL.md`).
pub fn build_probability_curve(
    records: &[OptionGreeksRecord],
    spot: f64,
    carry: f64,
) -> Result<Vec<(f64, f64)>, AnalyzerError> {
    if records.len() < 3 {
        return Err(AnalyzerError::InsufficientStrikes {
            needed: 3,
            found: records.len(),
        });
    }

    let mut curve: Vec<(f64, f64)> = records
        .iter()
        .map(|r| {
            let (_, sigma) = r.mark;
            let d1v = d1(spot, r.strike, carry, sigma, r.time);
            let d2v = d2(d1v, sigma, r.time);
            (r.strike, big_n(-d2v))
        })
        .collect();
    curve.sort_by(|a, b| a.0.total_cmp(&b.0));

    for i in 1..curve.len() {
        if curve[i].1 < curve[i - 1].1 {
            curve[i].1 = curve[i - 1].1;
        }
    }
    Ok(curve)
}

fn prob_at(curve: &[(f64, f64)], x: f64) -> f64 {
    if curve.is_empty() {
        return 0.0;
    }
    if x <= curve[0].0 {
        return curve[0].1;
    }
    if x >= curve[curve.len() - 1].0 {
        return curve[curve.len() - 1].1;
    }
    for window in curve.windows(2) {
        let (k0, p0) = window[0];
        let (k1, p1) = window[1];
        if x >= k0 && x <= k1 {
            let weight = if k1 > k0 { (x - k0) / (k1 - k0) } else { 0.0 };
            return p0 + weight * (p1 - p0);
        }
    }
    curve[curve.len() - 1].1
}

/// Expected value and expected loss of a payoff function, integrated over the
/// probability curve's strike ladder as a proxy for the terminal-price
/// distribution (`spec.md` §4.5.3 "expected-loss helper").
fn expected_value_and_loss(curve: &[(f64, f64)], payoff: impl Fn(f64) -> f64) -> (f64, f64) {
    let mut ev = 0.0;
    let mut loss = 0.0;
    for window in curve.windows(2) {
        let (k0, p0) = window[0];
        let (k1, p1) = window[1];
        let mid = (k0 + k1) / 2.0;
        let weight = (p1 - p0).max(0.0);
        let pay = payoff(mid);
        ev += weight * pay;
        if pay < 0.0 {
            loss += weight * pay;
        }
    }
    (ev, -loss)
}

/// Covered call: short one call against 100 long shares. Cost basis =
/// `M*S - (M*premium - c)`; payoff(S_T) = `min(S_T,K)*M - costBasis`
/// (`spec.md` §4.5.3).
pub fn score_covered_call(
    spot: f64,
    strike: f64,
    premium: f64,
    greeks: Greek,
    curve: &[(f64, f64)],
    config: &Config,
) -> ResultRow {
    let multiplier = config.contract_multiplier.to_f64().unwrap_or(100.0);
    let cost = config.trade_cost_per_leg.to_f64().unwrap_or(0.65);
    let cost_basis = multiplier * spot - (multiplier * premium - cost);
    single_leg_capped(StrategyTag::CoveredCall, strike, cost_basis, multiplier, greeks, curve)
}

/// Cash-secured put: short one put, cash-secured at strike. Cost basis =
/// `M*K - (M*premium - c)`; same payoff shape as the covered call
/// (`spec.md` §4.5.3).
pub fn score_cash_secured_put(
    strike: f64,
    premium: f64,
    greeks: Greek,
    curve: &[(f64, f64)],
    config: &Config,
) -> ResultRow {
    let multiplier = config.contract_multiplier.to_f64().unwrap_or(100.0);
    let cost = config.trade_cost_per_leg.to_f64().unwrap_or(0.65);
    let cost_basis = multiplier * strike - (multiplier * premium - cost);
    single_leg_capped(StrategyTag::CashSecuredPut, strike, cost_basis, multiplier, greeks, curve)
}

fn single_leg_capped(
    strategy: StrategyTag,
    strike: f64,
    cost_basis: f64,
    multiplier: f64,
    greeks: Greek,
    curve: &[(f64, f64)],
) -> ResultRow {
    let break_even = cost_basis / multiplier;
    let (expected_value, expected_loss) =
        expected_value_and_loss(curve, |s_t| s_t.min(strike) * multiplier - cost_basis);
    let probability_of_profit = 1.0 - prob_at(curve, break_even);

    ResultRow {
        strategy,
        strikes: vec![strike],
        cost_basis,
        premium_notional: multiplier * (strike - break_even).abs(),
        expected_value,
        probability_of_profit,
        expected_loss,
        break_even,
        greeks,
    }
}

/// Single-leg informational row: a plain long call or put with no offsetting
/// short leg (`spec.md` §6 strategy-tag enumeration's `Single`).
pub fn score_single(
    style: OptionStyle,
    strike: f64,
    premium: f64,
    greeks: Greek,
    curve: &[(f64, f64)],
    config: &Config,
) -> ResultRow {
    let multiplier = config.contract_multiplier.to_f64().unwrap_or(100.0);
    let cost_basis = multiplier * premium;
    let break_even = match style {
        OptionStyle::Call => strike + premium,
        OptionStyle::Put => strike - premium,
    };
    let payoff = move |s_t: f64| {
        let intrinsic = match style {
            OptionStyle::Call => (s_t - strike).max(0.0),
            OptionStyle::Put => (strike - s_t).max(0.0),
        };
        intrinsic * multiplier - cost_basis
    };
    let (expected_value, expected_loss) = expected_value_and_loss(curve, payoff);
    let probability_of_profit = match style {
        OptionStyle::Call => 1.0 - prob_at(curve, break_even),
        OptionStyle::Put => prob_at(curve, break_even),
    };

    ResultRow {
        strategy: StrategyTag::Single,
        strikes: vec![strike],
        cost_basis,
        premium_notional: multiplier * premium,
        expected_value,
        probability_of_profit,
        expected_loss,
        break_even,
        greeks,
    }
}

fn merge_greeks(long: &Greek, short: &Greek) -> Greek {
    Greek {
        delta: long.delta - short.delta,
        gamma: long.gamma - short.gamma,
        theta: long.theta - short.theta,
        vega: long.vega - short.vega,
        rho: long.rho - short.rho,
    }
}

/// Vertical bear call spread: short the lower strike, long the higher strike
/// (`spec.md` §4.5.3).
pub fn score_vertical_bear_call(
    strike_short: f64,
    premium_short: f64,
    greeks_short: Greek,
    strike_long: f64,
    premium_long: f64,
    greeks_long: Greek,
    curve: &[(f64, f64)],
    config: &Config,
) -> ResultRow {
    let multiplier = config.contract_multiplier.to_f64().unwrap_or(100.0);
    let cost = config.trade_cost_per_leg.to_f64().unwrap_or(0.65);
    let net_credit = premium_short - premium_long;
    let break_even = strike_short + net_credit - 2.0 * cost / multiplier;

    let payoff = move |s_t: f64| {
        multiplier * (net_credit - (s_t - strike_short).max(0.0) + (s_t - strike_long).max(0.0)) - 2.0 * cost
    };
    let (expected_value, expected_loss) = expected_value_and_loss(curve, payoff);
    let probability_of_profit = prob_at(curve, break_even);

    ResultRow {
        strategy: StrategyTag::VerticalBearCall,
        strikes: vec![strike_short, strike_long],
        cost_basis: (strike_long - strike_short) * multiplier - net_credit * multiplier + 2.0 * cost,
        premium_notional: net_credit * multiplier - 2.0 * cost,
        expected_value,
        probability_of_profit,
        expected_loss,
        break_even,
        greeks: merge_greeks(&greeks_long, &greeks_short),
    }
}

/// Vertical bull put spread: dual of the bear call spread, short the higher
/// strike, long the lower strike (`spec.md` §4.5.3).
pub fn score_vertical_bull_put(
    strike_short: f64,
    premium_short: f64,
    greeks_short: Greek,
    strike_long: f64,
    premium_long: f64,
    greeks_long: Greek,
    curve: &[(f64, f64)],
    config: &Config,
) -> ResultRow {
    let multiplier = config.contract_multiplier.to_f64().unwrap_or(100.0);
    let cost = config.trade_cost_per_leg.to_f64().unwrap_or(0.65);
    let net_credit = premium_short - premium_long;
    let break_even = strike_short - net_credit + 2.0 * cost / multiplier;

    let payoff = move |s_t: f64| {
        multiplier * (net_credit - (strike_short - s_t).max(0.0) + (strike_long - s_t).max(0.0)) - 2.0 * cost
    };
    let (expected_value, expected_loss) = expected_value_and_loss(curve, payoff);
    let probability_of_profit = 1.0 - prob_at(curve, break_even);

    ResultRow {
        strategy: StrategyTag::VerticalBullPut,
        strikes: vec![strike_short, strike_long],
        cost_basis: (strike_short - strike_long) * multiplier - net_credit * multiplier + 2.0 * cost,
        premium_notional: net_credit * multiplier - 2.0 * cost,
        expected_value,
        probability_of_profit,
        expected_loss,
        break_even,
        greeks: merge_greeks(&greeks_long, &greeks_short),
    }
}
