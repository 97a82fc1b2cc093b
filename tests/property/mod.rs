//! Property-based tests for the pricing-and-analysis pipeline.
//!
//! Each module exercises one of the universal invariants the pricing family
//! and analyzer must hold across a wide range of inputs, using `proptest` to
//! generate those inputs the way the pricing model family itself would see
//! them in production: spot/strike/volatility/rate/term drawn from broad,
//! realistic ranges rather than a handful of hand-picked scenarios.

mod early_exercise_test;
mod greeks_bounds_test;
mod iv_roundtrip_test;
mod lattice_convergence_test;
mod probability_curve_test;
mod put_call_parity_test;
