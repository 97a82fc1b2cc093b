use criterion::Criterion;
use optionanalytics::analyzer::{build_probability_curve, generate_greeks};
use optionanalytics::calculator::Calculator;
use optionanalytics::chain::{ChainRow, StrategyTag, VecChainTable, VecResultSink};
use optionanalytics::config::Config;
use optionanalytics::model::types::OptionStyle;
use optionanalytics::pricing::black_scholes::GeneralizedBlackScholes;
use optionanalytics::volatility::NewtonRaphson;
use std::hint::black_box;

fn sample_chain_rows() -> Vec<ChainRow> {
    [90.0, 95.0, 100.0, 105.0, 110.0]
        .iter()
        .map(|&strike| ChainRow {
            strike,
            style: OptionStyle::Call,
            bid: Some((100.0 - strike).max(1.0) * 0.2 + 2.0),
            ask: Some((100.0 - strike).max(1.0) * 0.2 + 2.6),
            last: Some((100.0 - strike).max(1.0) * 0.2 + 2.3),
            mark: Some((100.0 - strike).max(1.0) * 0.2 + 2.3),
            multiplier: 100.0,
            is_european: true,
            days_to_expiry: 182.5,
        })
        .collect()
}

pub(crate) fn benchmark_probability_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Probability Curve");
    let rows = sample_chain_rows();

    group.bench_function("generate_greeks + build_probability_curve", |bencher| {
        bencher.iter(|| {
            let records = generate_greeks(
                black_box(&rows),
                |time| Ok(GeneralizedBlackScholes::new(100.0, 0.05, 0.05, 0.2, time)),
                &NewtonRaphson,
            );
            build_probability_curve(&records, 100.0, 0.05).unwrap()
        })
    });

    group.finish();
}

pub(crate) fn benchmark_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("Calculator Pipeline");
    let chain = VecChainTable::new(sample_chain_rows());
    let calculator = Calculator::new(
        100.0,
        0.05,
        |time| Ok(GeneralizedBlackScholes::new(100.0, 0.05, 0.05, 0.2, time)),
        NewtonRaphson,
        Config::default(),
    );

    group.bench_function("analyze covered call", |bencher| {
        bencher.iter(|| {
            let mut sink = VecResultSink::default();
            calculator
                .analyze(black_box(&chain), StrategyTag::CoveredCall, &mut sink)
                .unwrap();
            sink
        })
    });

    group.finish();
}
