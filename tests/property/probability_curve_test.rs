//! Property-based test: the risk-neutral probability curve built by
//! [`optionanalytics::analyzer::build_probability_curve`] is monotone
//! non-decreasing in strike and stays within `[0, 1]`
//! (`spec.md` §8 Testable property: monotone probability curve).

use optionanalytics::analyzer::{build_probability_curve, generate_greeks};
use optionanalytics::chain::ChainRow;
use optionanalytics::model::types::OptionStyle;
use optionanalytics::pricing::black_scholes::GeneralizedBlackScholes;
use optionanalytics::volatility::NewtonRaphson;
use proptest::prelude::*;

fn chain_row(strike: f64, mark: f64, style: OptionStyle, days: f64) -> ChainRow {
    ChainRow {
        strike,
        style,
        bid: Some(mark - 0.1),
        ask: Some(mark + 0.1),
        last: Some(mark),
        mark: Some(mark),
        multiplier: 100.0,
        is_european: true,
        days_to_expiry: days,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(60))]

    #[test]
    fn probability_curve_is_monotone_and_bounded(
        spot in 60.0f64..200.0,
        sigma in 0.1f64..0.8,
        rate in 0.0f64..0.1,
        days in 30.0f64..365.0,
        strike_step in 5.0f64..25.0,
    ) {
        let model = GeneralizedBlackScholes::new(spot, rate, rate, sigma, days / 365.0);
        let strikes: Vec<f64> = (0..7).map(|i| spot - 3.0 * strike_step + i as f64 * strike_step).collect();
        let rows: Vec<ChainRow> = strikes
            .iter()
            .filter(|&&k| k > 1.0)
            .map(|&k| {
                use optionanalytics::pricing::PricingModel;
                let mark = model.price(k, OptionStyle::Call).unwrap().max(0.01);
                chain_row(k, mark, OptionStyle::Call, days)
            })
            .collect();

        let records = generate_greeks(&rows, |t| Ok(GeneralizedBlackScholes::new(spot, rate, rate, sigma, t)), &NewtonRaphson);
        if records.len() < 3 {
            return Ok(());
        }
        let curve = build_probability_curve(&records, spot, rate).unwrap();
        for window in curve.windows(2) {
            prop_assert!(window[1].1 >= window[0].1 - 1e-9);
        }
        for &(_, p) in &curve {
            prop_assert!((-1e-9..=1.0 + 1e-9).contains(&p));
        }
    }
}
