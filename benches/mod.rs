use criterion::{criterion_group, criterion_main};

mod analyzer;
mod pricing;

use analyzer::{benchmark_full_pipeline, benchmark_probability_curve};
use pricing::{
    benchmark_american_models, benchmark_black_scholes, benchmark_lattices,
    benchmark_monte_carlo, benchmark_volatility_solvers,
};

criterion_group!(
    benches,
    benchmark_black_scholes,
    benchmark_american_models,
    benchmark_lattices,
    benchmark_monte_carlo,
    benchmark_volatility_solvers,
    benchmark_probability_curve,
    benchmark_full_pipeline,
);
criterion_main!(benches);
