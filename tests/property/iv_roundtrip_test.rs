//! Property-based test for the implied-volatility round trip
//! (`spec.md` §8 Testable property: IV solver recovers the sigma a price
//! was generated from).

use optionanalytics::model::types::OptionStyle;
use optionanalytics::pricing::PricingModel;
use optionanalytics::pricing::black_scholes::GeneralizedBlackScholes;
use optionanalytics::volatility::{NewtonRaphson, VolatilitySolver};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn newton_raphson_recovers_the_generating_sigma(
        spot in 50.0f64..200.0,
        strike in 50.0f64..200.0,
        sigma in 0.05f64..1.2,
        time in 0.05f64..2.5,
        rate in 0.0f64..0.12,
        call in any::<bool>(),
    ) {
        let style = if call { OptionStyle::Call } else { OptionStyle::Put };
        let model = GeneralizedBlackScholes::new(spot, rate, rate, sigma, time);
        let target = model.price(strike, style).unwrap();
        // Ill-conditioned corners (deep ITM/OTM, near-zero vega) legitimately
        // fail to converge; only check the property when Newton succeeds.
        if let Ok(recovered) = NewtonRaphson.solve(&model, strike, style, target) {
            prop_assert!((recovered - sigma).abs() / sigma < 5e-3);
        }
    }
}
