//! Property-based tests for put-call parity.
//!
//! Put-call parity for European options:
//! `C - P = S - K * e^(-rT)`
//!
//! Where:
//! - C = call price, P = put price
//! - S = spot, K = strike
//! - r = risk-free rate, T = time to expiry (years)

use optionanalytics::model::types::OptionStyle;
use optionanalytics::pricing::PricingModel;
use optionanalytics::pricing::black_scholes::GeneralizedBlackScholes;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `C - P = S - K * e^(-rT)` when carry == rate (no dividend drag).
    #[test]
    fn test_put_call_parity(
        spot in 50.0f64..500.0,
        strike in 50.0f64..500.0,
        sigma in 0.05f64..1.5,
        time in 0.05f64..3.0,
        rate in 0.0f64..0.15,
    ) {
        let model = GeneralizedBlackScholes::new(spot, rate, rate, sigma, time);
        let call = model.price(strike, OptionStyle::Call).unwrap();
        let put = model.price(strike, OptionStyle::Put).unwrap();
        let rhs = spot - strike * (-rate * time).exp();
        prop_assert!((call - put - rhs).abs() < 1e-6 * spot.max(1.0));
    }

    #[test]
    fn test_call_price_non_negative(
        spot in 10.0f64..500.0,
        strike in 10.0f64..500.0,
        sigma in 0.05f64..1.5,
        time in 0.05f64..3.0,
        rate in 0.0f64..0.15,
    ) {
        let model = GeneralizedBlackScholes::new(spot, rate, rate, sigma, time);
        let call = model.price(strike, OptionStyle::Call).unwrap();
        prop_assert!(call >= -1e-9);
    }

    #[test]
    fn test_put_price_non_negative(
        spot in 10.0f64..500.0,
        strike in 10.0f64..500.0,
        sigma in 0.05f64..1.5,
        time in 0.05f64..3.0,
        rate in 0.0f64..0.15,
    ) {
        let model = GeneralizedBlackScholes::new(spot, rate, rate, sigma, time);
        let put = model.price(strike, OptionStyle::Put).unwrap();
        prop_assert!(put >= -1e-9);
    }

    #[test]
    fn test_call_price_increases_with_spot(
        strike in 50.0f64..200.0,
        sigma in 0.1f64..1.0,
        time in 0.1f64..2.0,
        rate in 0.0f64..0.1,
        bump in 0.5f64..20.0,
    ) {
        let spot = 100.0;
        let lower = GeneralizedBlackScholes::new(spot, rate, rate, sigma, time)
            .price(strike, OptionStyle::Call)
            .unwrap();
        let higher = GeneralizedBlackScholes::new(spot + bump, rate, rate, sigma, time)
            .price(strike, OptionStyle::Call)
            .unwrap();
        prop_assert!(higher >= lower - 1e-9);
    }

    #[test]
    fn test_put_price_decreases_with_spot(
        strike in 50.0f64..200.0,
        sigma in 0.1f64..1.0,
        time in 0.1f64..2.0,
        rate in 0.0f64..0.1,
        bump in 0.5f64..20.0,
    ) {
        let spot = 100.0;
        let lower = GeneralizedBlackScholes::new(spot, rate, rate, sigma, time)
            .price(strike, OptionStyle::Put)
            .unwrap();
        let higher = GeneralizedBlackScholes::new(spot + bump, rate, rate, sigma, time)
            .price(strike, OptionStyle::Put)
            .unwrap();
        prop_assert!(higher <= lower + 1e-9);
    }
}
