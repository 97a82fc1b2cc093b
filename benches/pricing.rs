use criterion::Criterion;
use optionanalytics::model::types::OptionStyle;
use optionanalytics::pricing::PricingModel;
use optionanalytics::pricing::barone_adesi_whaley::BaroneAdesiWhaley;
use optionanalytics::pricing::binomial::BinomialTree;
use optionanalytics::pricing::black_scholes::GeneralizedBlackScholes;
use optionanalytics::pricing::monte_carlo::MonteCarlo;
use optionanalytics::pricing::trinomial::TrinomialTree;
use optionanalytics::volatility::{NewtonRaphson, VolatilitySolver};
use std::hint::black_box;

pub(crate) fn benchmark_black_scholes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Black-Scholes");
    let model = GeneralizedBlackScholes::new(100.0, 0.05, 0.05, 0.2, 0.5);

    group.bench_function("price call", |bencher| {
        bencher.iter(|| model.price(black_box(100.0), OptionStyle::Call).unwrap())
    });

    group.bench_function("partials call", |bencher| {
        bencher.iter(|| model.partials(black_box(100.0), OptionStyle::Call).unwrap())
    });

    group.finish();
}

pub(crate) fn benchmark_american_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("American Approximations");
    let baw = BaroneAdesiWhaley::new(100.0, 0.08, 0.02, 0.25, 0.5);

    group.bench_function("barone-adesi-whaley price", |bencher| {
        bencher.iter(|| baw.price(black_box(100.0), OptionStyle::Put).unwrap())
    });

    group.finish();
}

pub(crate) fn benchmark_lattices(c: &mut Criterion) {
    let mut group = c.benchmark_group("Lattice Models");

    for depth in [64usize, 256, 1024] {
        let tree = BinomialTree::crr(100.0, 0.05, 0.05, 0.2, 0.5, depth, true, vec![]);
        group.bench_function(format!("crr depth={depth}"), |bencher| {
            bencher.iter(|| tree.price(black_box(100.0), OptionStyle::Put).unwrap())
        });

        let trinomial = TrinomialTree::phelim_boyle(100.0, 0.05, 0.05, 0.2, 0.5, depth / 2, true);
        group.bench_function(format!("phelim-boyle trinomial depth={}", depth / 2), |bencher| {
            bencher.iter(|| trinomial.price(black_box(100.0), OptionStyle::Put).unwrap())
        });
    }

    group.finish();
}

pub(crate) fn benchmark_monte_carlo(c: &mut Criterion) {
    let mut group = c.benchmark_group("Monte Carlo");
    let mc = MonteCarlo::new(100.0, 0.05, 0.05, 0.2, 0.5, 4096, 7);

    group.bench_function("price call, 4096 paths", |bencher| {
        bencher.iter(|| mc.price(black_box(100.0), OptionStyle::Call).unwrap())
    });

    group.finish();
}

pub(crate) fn benchmark_volatility_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Volatility Solvers");
    let model = GeneralizedBlackScholes::new(100.0, 0.05, 0.05, 0.2, 0.5);
    let target = model.price(105.0, OptionStyle::Call).unwrap();

    group.bench_function("newton-raphson", |bencher| {
        bencher.iter(|| NewtonRaphson.solve(&model, black_box(105.0), OptionStyle::Call, target).unwrap())
    });

    group.finish();
}
