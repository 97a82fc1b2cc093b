//! Scalar and bivariate cumulative normal distribution helpers (C1).
//!
//! Pure, thread-safe, deterministic — no state is held between calls, which
//! is what lets every pricing model in [`crate::pricing`] call these freely
//! from concurrent `Calculator` instances (`spec.md` §5).

const ONE_DIV_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal density `φ(x)`.
pub fn phi_density(x: f64) -> f64 {
    ONE_DIV_SQRT_2PI * (-x * x / 2.0).exp()
}

/// Scalar cumulative standard normal `Φ(x)`, via the Hastings 5-term
/// rational approximation (`spec.md` §4.1).
pub fn big_n(x: f64) -> f64 {
    const A1: f64 = 0.319_381_530;
    const A2: f64 = -0.356_563_782;
    const A3: f64 = 1.781_477_937;
    const A4: f64 = -1.821_255_978;
    const A5: f64 = 1.330_274_429;

    let ax = x.abs();
    let k = 1.0 / (1.0 + 0.231_641_9 * ax);
    let poly = k * (A1 + k * (A2 + k * (A3 + k * (A4 + k * A5))));
    let tail = 1.0 - phi_density(ax) * poly;
    if x < 0.0 { 1.0 - tail } else { tail }
}

const PI: f64 = std::f64::consts::PI;

const Y: [f64; 5] = [0.100_242_15, 0.482_813_97, 1.060_949_8, 1.779_729_4, 2.669_760_4];
const Y2: [f64; 5] = [0.200_484_30, 0.965_627_94, 2.121_899_6, 3.559_458_8, 5.339_520_8];

#[rustfmt::skip]
const XX: [[f64; 5]; 5] = [
    [0.061_705_615_357_822_499, 0.097_457_450_624_080_497, 0.052_517_578_617_868_502, 0.008_258_674_810_958_998, 0.000_204_898_642_504_041],
    [0.097_457_450_624_080_497, 0.153_923_668_487_344_900, 0.082_945_924_700_163_307, 0.013_043_697_691_726_199, 0.000_323_615_593_475_274],
    [0.052_517_578_617_868_502, 0.082_945_924_700_163_307, 0.044_697_651_062_876_105, 0.007_028_948_680_745_399, 0.000_174_389_000_158_255],
    [0.008_258_674_810_958_998, 0.013_043_697_691_726_199, 0.007_028_948_680_745_399, 0.001_105_340_401_155_600, 0.000_027_423_618_544_844],
    [0.000_204_898_642_504_041, 0.000_323_615_593_475_274, 0.000_174_389_000_158_255, 0.000_027_423_618_544_844, 0.000_000_680_383_032_509],
];

fn sign(d: f64) -> f64 {
    if d < 0.0 { -1.0 } else { 1.0 }
}

/// Bivariate cumulative standard normal `Φ₂(a, b, rho)`, Drezner-Wesolowski
/// five-node Gauss quadrature with the four quadrant-reduction identities
/// from `spec.md` §4.1.
pub fn big_n2(a: f64, b: f64, rho: f64) -> f64 {
    if a.is_nan() || b.is_nan() || rho.is_nan() {
        return f64::NAN;
    }
    let b = if b.is_infinite() { 10.0 } else { b };

    let t = (2.0 * (1.0 - rho * rho)).sqrt();
    let a1 = a / t;
    let b1 = b / t;

    if a <= 0.0 && b <= 0.0 && rho <= 0.0 {
        let rho20 = rho * 2.0;
        let mut sum = 0.0;
        for i in 0..5 {
            for j in 0..5 {
                sum += XX[i][j]
                    * (a1 * (Y2[i] - a1) + b1 * (Y2[j] - b1) + rho20 * (Y[i] - a1) * (Y[j] - b1))
                        .exp();
            }
        }
        (1.0 - rho * rho).sqrt() / PI * sum
    } else if a <= 0.0 && b >= 0.0 && rho >= 0.0 {
        big_n(a) - big_n2(a, -b, -rho)
    } else if a >= 0.0 && b <= 0.0 && rho >= 0.0 {
        big_n(b) - big_n2(-a, b, -rho)
    } else if a >= 0.0 && b >= 0.0 && rho <= 0.0 {
        big_n(a) + big_n(b) - 1.0 + big_n2(-a, -b, rho)
    } else if a * b * rho > 0.0 {
        let sp2a = (a * a - rho * 2.0 * a * b + b * b).sqrt();
        let rho1 = (rho * a - b) * sign(a) / sp2a;
        let rho2 = (rho * b - a) * sign(b) / sp2a;
        let delta = (1.0 - sign(a) * sign(b)) / 4.0;
        big_n2(a, 0.0, rho1) + big_n2(b, 0.0, rho2) - delta
    } else {
        f64::NAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn big_n_matches_known_values() {
        assert_relative_eq!(big_n(0.0), 0.5, epsilon = 1e-6);
        assert_relative_eq!(big_n(1.0), 0.8413, epsilon = 1e-4);
        assert_relative_eq!(big_n(-1.0), 0.1587, epsilon = 1e-4);
    }

    #[test]
    fn big_n_is_symmetric() {
        for x in [-2.5, -1.0, 0.3, 1.7] {
            assert_relative_eq!(big_n(x) + big_n(-x), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn big_n2_nan_propagates() {
        assert!(big_n2(f64::NAN, 0.0, 0.0).is_nan());
    }

    // Validation table ported from the bivariate-normal reference
    // implementation this crate's Φ₂ is grounded on.
    #[test]
    fn big_n2_matches_reference_table() {
        let cases: [(f64, f64, f64, f64); 27] = [
            (0.0, 0.0, 0.0, 0.250000),
            (0.0, 0.0, -0.5, 0.166667),
            (0.0, 0.0, 0.5, 0.333333),
            (0.0, -0.5, 0.0, 0.154269),
            (0.0, -0.5, -0.5, 0.081660),
            (0.0, -0.5, 0.5, 0.226878),
            (0.0, 0.5, 0.0, 0.345731),
            (0.0, 0.5, -0.5, 0.273122),
            (0.0, 0.5, 0.5, 0.418340),
            (-0.5, 0.0, 0.0, 0.154269),
            (-0.5, 0.0, -0.5, 0.081660),
            (-0.5, 0.0, 0.5, 0.226878),
            (-0.5, -0.5, 0.0, 0.095195),
            (-0.5, -0.5, -0.5, 0.036298),
            (-0.5, -0.5, 0.5, 0.163319),
            (-0.5, 0.5, 0.0, 0.213342),
            (-0.5, 0.5, -0.5, 0.145218),
            (-0.5, 0.5, 0.5, 0.272239),
            (0.5, 0.0, 0.0, 0.345731),
            (0.5, 0.0, -0.5, 0.273122),
            (0.5, 0.0, 0.5, 0.418340),
            (0.5, -0.5, 0.0, 0.213342),
            (0.5, -0.5, -0.5, 0.145218),
            (0.5, -0.5, 0.5, 0.272239),
            (0.5, 0.5, 0.0, 0.478120),
            (0.5, 0.5, -0.5, 0.419223),
            (0.5, 0.5, 0.5, 0.546244),
        ];
        for (a, b, rho, expected) in cases {
            assert_relative_eq!(big_n2(a, b, rho), expected, epsilon = 1e-5);
        }
    }
}
