//! Calculator façade (C6): the single entry point into the core.
//!
//! A `Calculator` is parameterized over one pricing model and one implied-
//! volatility solver, the way `spec.md` §4.6 asks for a "template" per
//! (pricing model, IV method) pair; here the parameterization is generic
//! rather than a C++-style template instantiation. `analyze(strategy)` drives
//! the full §4.5 pipeline over a chain and writes rows to a sink; it is
//! idempotent and safe to call repeatedly with different strategy tags
//! against the same chain.

use crate::analyzer::{
    build_probability_curve, generate_greeks, score_cash_secured_put, score_covered_call,
    score_single, score_vertical_bear_call, score_vertical_bull_put,
};
use crate::chain::{ChainRow, ChainTable, ResultSink, StrategyTag};
use crate::config::Config;
use crate::error::{AnalyzerError, AnalyzerResult, PricingError};
use crate::model::types::OptionStyle;
use crate::pricing::PricingModel;
use crate::volatility::VolatilitySolver;
use std::marker::PhantomData;

/// Parameterizes the analyzer (C5) over one pricing model `M` (constructed
/// per strike's time-to-expiry by `make_model`) and one IV solver `V`.
///
/// `make_model` plays the role of `spec.md` §4.6's
/// `createPricingMethod(S,r,b,σ,T,european)` hook: it captures the fixed
/// `(S,r,b,σ)` tuple for this analysis and is invoked once per strike with
/// that strike's time-to-expiry. There is no `destroyPricingMethod` hook
/// because pricing models here are cheap value types (or, for lattice/Monte
/// Carlo models, own their cached shape directly) rather than heap-allocated
/// resources the façade must release on every exit path.
pub struct Calculator<M, F, V>
where
    F: Fn(f64) -> Result<M, PricingError>,
    M: PricingModel,
    V: VolatilitySolver,
{
    underlying_mark: f64,
    carry: f64,
    make_model: F,
    solver: V,
    config: Config,
    _model: PhantomData<M>,
}

impl<M, F, V> Calculator<M, F, V>
where
    F: Fn(f64) -> Result<M, PricingError>,
    M: PricingModel,
    V: VolatilitySolver,
{
    pub fn new(underlying_mark: f64, carry: f64, make_model: F, solver: V, config: Config) -> Self {
        Calculator {
            underlying_mark,
            carry,
            make_model,
            solver,
            config,
            _model: PhantomData,
        }
    }

    /// Runs the §4.5 pipeline for `strategy` over every row of `chain`,
    /// emitting one row per candidate position to `sink`.
    pub fn analyze(
        &self,
        chain: &impl ChainTable,
        strategy: StrategyTag,
        sink: &mut impl ResultSink,
    ) -> AnalyzerResult<()> {
        let rows = chain.rows()?;
        match strategy {
            StrategyTag::Single => self.analyze_single(&rows, sink),
            StrategyTag::CoveredCall => self.analyze_single_leg(&rows, OptionStyle::Call, true, sink),
            StrategyTag::CashSecuredPut => self.analyze_single_leg(&rows, OptionStyle::Put, false, sink),
            StrategyTag::VerticalBearCall => self.analyze_vertical(&rows, OptionStyle::Call, true, sink),
            StrategyTag::VerticalBullPut => self.analyze_vertical(&rows, OptionStyle::Put, false, sink),
        }
    }

    /// Naked long call/put rows for every side present in the chain
    /// (`spec.md` §6 `Single` strategy tag). A side with fewer than 3
    /// converged strikes is skipped rather than failing the whole call,
    /// since `Single` makes no claim the chain must support both sides.
    fn analyze_single(&self, rows: &[ChainRow], sink: &mut impl ResultSink) -> AnalyzerResult<()> {
        for style in [OptionStyle::Call, OptionStyle::Put] {
            let mut side_rows: Vec<ChainRow> = rows.iter().copied().filter(|r| r.style == style).collect();
            side_rows.sort_by(|a, b| a.strike.total_cmp(&b.strike));
            if side_rows.len() < 3 {
                continue;
            }
            let records = generate_greeks(&side_rows, &self.make_model, &self.solver);
            if records.len() < 3 {
                continue;
            }
            let curve = build_probability_curve(&records, self.underlying_mark, self.carry)?;
            for record in &records {
                let row = score_single(style, record.strike, record.mark.0, record.greeks, &curve, &self.config);
                sink.emit(row);
            }
        }
        Ok(())
    }

    /// Covered call / cash-secured put: rows ordered descending by strike
    /// for calls and ascending for puts, per `spec.md` §4.5.4.
    fn analyze_single_leg(
        &self,
        rows: &[ChainRow],
        style: OptionStyle,
        is_covered_call: bool,
        sink: &mut impl ResultSink,
    ) -> AnalyzerResult<()> {
        let mut side_rows: Vec<ChainRow> = rows.iter().copied().filter(|r| r.style == style).collect();
        side_rows.sort_by(|a, b| {
            if is_covered_call {
                b.strike.total_cmp(&a.strike)
            } else {
                a.strike.total_cmp(&b.strike)
            }
        });

        let records = generate_greeks(&side_rows, &self.make_model, &self.solver);
        if records.len() < 3 {
            return Err(AnalyzerError::InsufficientStrikes {
                needed: 3,
                found: records.len(),
            });
        }
        let curve = build_probability_curve(&records, self.underlying_mark, self.carry)?;

        for record in &records {
            let row = if is_covered_call {
                score_covered_call(
                    self.underlying_mark,
                    record.strike,
                    record.mark.0,
                    record.greeks,
                    &curve,
                    &self.config,
                )
            } else {
                score_cash_secured_put(record.strike, record.mark.0, record.greeks, &curve, &self.config)
            };
            sink.emit(row);
        }
        Ok(())
    }

    /// Vertical bear-call / bull-put spread: adjacent strike pairs along the
    /// ascending-strike ladder, short the inner leg that makes the position a
    /// credit spread (`spec.md` §4.5.3).
    fn analyze_vertical(
        &self,
        rows: &[ChainRow],
        style: OptionStyle,
        is_bear_call: bool,
        sink: &mut impl ResultSink,
    ) -> AnalyzerResult<()> {
        let mut side_rows: Vec<ChainRow> = rows.iter().copied().filter(|r| r.style == style).collect();
        side_rows.sort_by(|a, b| a.strike.total_cmp(&b.strike));

        if side_rows.len() < 2 {
            let strategy = if is_bear_call {
                StrategyTag::VerticalBearCall
            } else {
                StrategyTag::VerticalBullPut
            };
            return Err(AnalyzerError::UnsupportedStrategy {
                strategy: format!("{strategy:?}"),
                reason: "need at least two strikes to form a vertical spread".to_string(),
            });
        }

        let records = generate_greeks(&side_rows, &self.make_model, &self.solver);
        if records.len() < 3 {
            return Err(AnalyzerError::InsufficientStrikes {
                needed: 3,
                found: records.len(),
            });
        }
        let curve = build_probability_curve(&records, self.underlying_mark, self.carry)?;

        for pair in records.windows(2) {
            let (lower, higher) = (&pair[0], &pair[1]);
            let row = if is_bear_call {
                score_vertical_bear_call(
                    lower.strike,
                    lower.mark.0,
                    lower.greeks,
                    higher.strike,
                    higher.mark.0,
                    higher.greeks,
                    &curve,
                    &self.config,
                )
            } else {
                score_vertical_bull_put(
                    higher.strike,
                    higher.mark.0,
                    higher.greeks,
                    lower.strike,
                    lower.mark.0,
                    lower.greeks,
                    &curve,
                    &self.config,
                )
            };
            sink.emit(row);
        }
        Ok(())
    }
}
