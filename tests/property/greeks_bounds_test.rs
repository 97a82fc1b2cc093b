//! Property-based tests for Greek bounds.
//!
//! A European call's delta must lie in `[0, 1]`, a European put's delta in
//! `[-1, 0]`, and gamma/vega must never be negative for either side.

use optionanalytics::model::types::OptionStyle;
use optionanalytics::pricing::PricingModel;
use optionanalytics::pricing::black_scholes::GeneralizedBlackScholes;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_call_delta_bounds(
        spot in 10.0f64..500.0,
        strike in 10.0f64..500.0,
        sigma in 0.05f64..1.5,
        time in 0.02f64..3.0,
        rate in 0.0f64..0.15,
    ) {
        let model = GeneralizedBlackScholes::new(spot, rate, rate, sigma, time);
        let greeks = model.partials(strike, OptionStyle::Call).unwrap();
        prop_assert!(greeks.delta >= -1e-6 && greeks.delta <= 1.0 + 1e-6);
    }

    #[test]
    fn test_put_delta_bounds(
        spot in 10.0f64..500.0,
        strike in 10.0f64..500.0,
        sigma in 0.05f64..1.5,
        time in 0.02f64..3.0,
        rate in 0.0f64..0.15,
    ) {
        let model = GeneralizedBlackScholes::new(spot, rate, rate, sigma, time);
        let greeks = model.partials(strike, OptionStyle::Put).unwrap();
        prop_assert!(greeks.delta >= -1.0 - 1e-6 && greeks.delta <= 1e-6);
    }

    #[test]
    fn test_gamma_is_shared_across_call_and_put(
        spot in 10.0f64..500.0,
        strike in 10.0f64..500.0,
        sigma in 0.05f64..1.5,
        time in 0.02f64..3.0,
        rate in 0.0f64..0.15,
    ) {
        let model = GeneralizedBlackScholes::new(spot, rate, rate, sigma, time);
        let call = model.partials(strike, OptionStyle::Call).unwrap();
        let put = model.partials(strike, OptionStyle::Put).unwrap();
        prop_assert!(call.gamma >= -1e-9);
        prop_assert!((call.gamma - put.gamma).abs() < 1e-6);
    }

    #[test]
    fn test_vega_is_non_negative_and_shared(
        spot in 10.0f64..500.0,
        strike in 10.0f64..500.0,
        sigma in 0.05f64..1.5,
        time in 0.02f64..3.0,
        rate in 0.0f64..0.15,
    ) {
        let model = GeneralizedBlackScholes::new(spot, rate, rate, sigma, time);
        let call_vega = model.vega(strike, OptionStyle::Call).unwrap();
        let put_vega = model.vega(strike, OptionStyle::Put).unwrap();
        prop_assert!(call_vega >= -1e-9);
        prop_assert!((call_vega - put_vega).abs() < 1e-6);
    }
}
