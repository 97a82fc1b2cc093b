//! Property-based test: American prices never fall below the corresponding
//! European price (`spec.md` §8 Testable property: early-exercise dominance).
//! `r <= b` regimes collapse the American call to its European value exactly,
//! so this generator keeps `b < r` to exercise the genuine early-exercise
//! premium.

use optionanalytics::model::types::OptionStyle;
use optionanalytics::pricing::PricingModel;
use optionanalytics::pricing::barone_adesi_whaley::BaroneAdesiWhaley;
use optionanalytics::pricing::bjerksund_stensland::BjerksundStensland;
use optionanalytics::pricing::black_scholes::GeneralizedBlackScholes;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(80))]

    #[test]
    fn baw_american_put_dominates_european(
        spot in 50.0f64..200.0,
        strike in 50.0f64..200.0,
        sigma in 0.1f64..1.0,
        time in 0.1f64..2.0,
        rate in 0.01f64..0.12,
        carry in 0.0f64..0.05,
    ) {
        let european = GeneralizedBlackScholes::new(spot, rate, carry, sigma, time);
        let american = BaroneAdesiWhaley::new(spot, rate, carry, sigma, time);
        let european_price = european.price(strike, OptionStyle::Put).unwrap();
        let american_price = american.price(strike, OptionStyle::Put).unwrap();
        prop_assert!(american_price >= european_price - 1e-6);
    }

    #[test]
    fn bjerksund_stensland_american_call_dominates_european_when_carry_below_rate(
        spot in 50.0f64..200.0,
        strike in 50.0f64..200.0,
        sigma in 0.1f64..1.0,
        time in 0.1f64..2.0,
        rate in 0.03f64..0.12,
        carry in 0.0f64..0.02,
    ) {
        let european = GeneralizedBlackScholes::new(spot, rate, carry, sigma, time);
        let american = BjerksundStensland::new(spot, rate, carry, sigma, time);
        let european_price = european.price(strike, OptionStyle::Call).unwrap();
        let american_price = american.price(strike, OptionStyle::Call).unwrap();
        prop_assert!(american_price >= european_price - 1e-6);
    }
}
