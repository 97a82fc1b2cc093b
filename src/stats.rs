//! Sample statistics (C4): mean and population standard deviation over a
//! finite, already-materialized real sequence (`spec.md` §4.4).
//!
//! Implemented as a two-pass computation (mean, then mean of squared
//! deviations) rather than Welford's online algorithm: the analyzer only
//! ever calls this over small per-strike Greek/vol arrays, not streaming
//! data, so the simpler two-pass form is the faithful match for the
//! original's `stats.cpp`.

/// Arithmetic mean `Σx / n`. Callers must supply a non-empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation `sqrt(Σ(x - mean)^2 / n)`.
pub fn population_std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_of_uniform_sequence() {
        assert_relative_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
    }

    #[test]
    fn population_std_dev_of_constant_sequence_is_zero() {
        assert_relative_eq!(population_std_dev(&[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn population_std_dev_matches_known_value() {
        // [2, 4, 4, 4, 5, 5, 7, 9] has population variance 4, std dev 2.
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(population_std_dev(&values), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn single_value_has_zero_spread() {
        assert_relative_eq!(population_std_dev(&[42.0]), 0.0);
    }
}
