//! External contracts (C7): read-only chain table, mutable result sink,
//! risk-free-rate term structure, dividend schedule, and historical
//! volatility (`spec.md` §6). These are narrow capability interfaces the
//! analyzer depends on and never implements itself — `spec.md` §9's
//! "external-interface abstraction" guidance against a singleton database.
//!
//! Each trait ships an in-memory reference implementation (`Vec`-backed or
//! tenor-table-backed) suitable for tests and for callers who do not have a
//! richer backing store.

use crate::error::ChainError;
use crate::model::option::DividendEvent;
use crate::model::types::OptionStyle;

/// One row of an option chain: a single (expiry, strike, type) quote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainRow {
    pub strike: f64,
    pub style: OptionStyle,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub last: Option<f64>,
    pub mark: Option<f64>,
    pub multiplier: f64,
    pub is_european: bool,
    pub days_to_expiry: f64,
}

/// Read-only, index-addressable option chain (`spec.md` §6 "Chain table").
pub trait ChainTable {
    fn len(&self) -> usize;
    fn row(&self, index: usize) -> Result<ChainRow, ChainError>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn rows(&self) -> Result<Vec<ChainRow>, ChainError> {
        (0..self.len()).map(|i| self.row(i)).collect()
    }
}

/// A chain table backed by an in-memory vector of rows.
#[derive(Debug, Clone, Default)]
pub struct VecChainTable {
    rows: Vec<ChainRow>,
}

impl VecChainTable {
    pub fn new(rows: Vec<ChainRow>) -> Self {
        VecChainTable { rows }
    }
}

impl ChainTable for VecChainTable {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn row(&self, index: usize) -> Result<ChainRow, ChainError> {
        self.rows.get(index).copied().ok_or(ChainError::RowOutOfBounds {
            index,
            len: self.rows.len(),
        })
    }
}

/// One emitted analysis row (`spec.md` §3 "ResultRow" / §6 result-sink column tags).
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub strategy: StrategyTag,
    pub strikes: Vec<f64>,
    pub cost_basis: f64,
    pub premium_notional: f64,
    pub expected_value: f64,
    pub probability_of_profit: f64,
    pub expected_loss: f64,
    pub break_even: f64,
    pub greeks: crate::model::option::Greek,
}

/// Strategy tag enumeration (`spec.md` §6), extensible for future additions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyTag {
    Single,
    CoveredCall,
    CashSecuredPut,
    VerticalBearCall,
    VerticalBullPut,
}

/// Single-row emission sink (`spec.md` §6 "Result sink").
pub trait ResultSink {
    fn emit(&mut self, row: ResultRow);
}

/// A result sink that accumulates rows in an in-memory vector, in emission order.
#[derive(Debug, Clone, Default)]
pub struct VecResultSink {
    pub rows: Vec<ResultRow>,
}

impl ResultSink for VecResultSink {
    fn emit(&mut self, row: ResultRow) {
        self.rows.push(row);
    }
}

/// Risk-free-rate term structure: `rate(termYears) -> r` (`spec.md` §6).
/// Domain `0 < term_years <= 30`.
pub trait RateCurve {
    fn rate(&self, term_years: f64) -> Result<f64, ChainError>;
}

/// A flat (single-rate) term structure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatRateCurve(pub f64);

impl RateCurve for FlatRateCurve {
    fn rate(&self, term_years: f64) -> Result<f64, ChainError> {
        if term_years <= 0.0 || term_years > 30.0 {
            return Err(ChainError::NoRateForTerm { term_years });
        }
        Ok(self.0)
    }
}

/// A term structure interpolated linearly between stored `(termYears, rate)` tenors.
#[derive(Debug, Clone, Default)]
pub struct TermRateCurve {
    tenors: Vec<(f64, f64)>,
}

impl TermRateCurve {
    /// Tenors need not be pre-sorted; they are sorted by term at construction.
    pub fn new(mut tenors: Vec<(f64, f64)>) -> Self {
        tenors.sort_by(|a, b| a.0.total_cmp(&b.0));
        TermRateCurve { tenors }
    }
}

impl RateCurve for TermRateCurve {
    fn rate(&self, term_years: f64) -> Result<f64, ChainError> {
        if term_years <= 0.0 || term_years > 30.0 || self.tenors.is_empty() {
            return Err(ChainError::NoRateForTerm { term_years });
        }
        if term_years <= self.tenors[0].0 {
            return Ok(self.tenors[0].1);
        }
        if term_years >= self.tenors[self.tenors.len() - 1].0 {
            return Ok(self.tenors[self.tenors.len() - 1].1);
        }
        for window in self.tenors.windows(2) {
            let (t0, r0) = window[0];
            let (t1, r1) = window[1];
            if term_years >= t0 && term_years <= t1 {
                let weight = (term_years - t0) / (t1 - t0);
                return Ok(r0 + weight * (r1 - r0));
            }
        }
        Err(ChainError::NoRateForTerm { term_years })
    }
}

/// Discrete cash-dividend schedule or continuous yield lookup by symbol
/// (`spec.md` §6 "Dividend schedule").
pub trait DividendSchedule {
    fn discrete_schedule(&self, symbol: &str) -> Option<Vec<DividendEvent>>;
    fn continuous_yield(&self, symbol: &str) -> Option<f64>;
}

/// An in-memory dividend schedule keyed by symbol.
#[derive(Debug, Clone, Default)]
pub struct ScheduleDividends {
    discrete: std::collections::HashMap<String, Vec<DividendEvent>>,
    continuous: std::collections::HashMap<String, f64>,
}

impl ScheduleDividends {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_discrete(mut self, symbol: impl Into<String>, schedule: Vec<DividendEvent>) -> Self {
        self.discrete.insert(symbol.into(), schedule);
        self
    }

    pub fn with_continuous_yield(mut self, symbol: impl Into<String>, yield_rate: f64) -> Self {
        self.continuous.insert(symbol.into(), yield_rate);
        self
    }
}

impl DividendSchedule for ScheduleDividends {
    fn discrete_schedule(&self, symbol: &str) -> Option<Vec<DividendEvent>> {
        self.discrete.get(symbol).cloned()
    }

    fn continuous_yield(&self, symbol: &str) -> Option<f64> {
        self.continuous.get(symbol).copied()
    }
}

/// Historical-volatility lookup, used as a fallback sigma seed when the
/// market mark is unavailable (`spec.md` §6).
pub trait HistoricalVolatility {
    fn historical_volatility(&self, symbol: &str, depth_days: u32) -> Result<f64, ChainError>;
}

/// A historical-volatility source backed by a fixed per-symbol value.
#[derive(Debug, Clone, Default)]
pub struct FlatHistoricalVolatility {
    values: std::collections::HashMap<String, f64>,
}

impl FlatHistoricalVolatility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>, sigma: f64) -> Self {
        self.values.insert(symbol.into(), sigma);
        self
    }
}

impl HistoricalVolatility for FlatHistoricalVolatility {
    fn historical_volatility(&self, symbol: &str, _depth_days: u32) -> Result<f64, ChainError> {
        self.values.get(symbol).copied().ok_or_else(|| ChainError::NoHistoricalVolatility {
            symbol: symbol.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(strike: f64, style: OptionStyle) -> ChainRow {
        ChainRow {
            strike,
            style,
            bid: Some(1.0),
            ask: Some(1.2),
            last: Some(1.1),
            mark: Some(1.1),
            multiplier: 100.0,
            is_european: true,
            days_to_expiry: 30.0,
        }
    }

    #[test]
    fn vec_chain_table_reports_len_and_rows() {
        let table = VecChainTable::new(vec![sample_row(95.0, OptionStyle::Put), sample_row(100.0, OptionStyle::Call)]);
        assert_eq!(table.len(), 2);
        assert!(table.row(0).is_ok());
        assert!(table.row(2).is_err());
    }

    #[test]
    fn flat_rate_curve_rejects_out_of_domain_terms() {
        let curve = FlatRateCurve(0.05);
        assert!(curve.rate(0.0).is_err());
        assert!(curve.rate(31.0).is_err());
        assert_eq!(curve.rate(1.0).unwrap(), 0.05);
    }

    #[test]
    fn term_rate_curve_interpolates_linearly() {
        let curve = TermRateCurve::new(vec![(1.0, 0.02), (5.0, 0.06)]);
        assert!((curve.rate(3.0).unwrap() - 0.04).abs() < 1e-9);
        assert_eq!(curve.rate(0.5).unwrap(), 0.02);
        assert_eq!(curve.rate(10.0).unwrap(), 0.06);
    }

    #[test]
    fn dividend_schedule_looks_up_by_symbol() {
        let schedule = ScheduleDividends::new().with_continuous_yield("AAPL", 0.01);
        assert_eq!(schedule.continuous_yield("AAPL"), Some(0.01));
        assert_eq!(schedule.continuous_yield("MSFT"), None);
    }

    #[test]
    fn vec_result_sink_preserves_emission_order() {
        let mut sink = VecResultSink::default();
        sink.emit(ResultRow {
            strategy: StrategyTag::Single,
            strikes: vec![100.0],
            cost_basis: 0.0,
            premium_notional: 0.0,
            expected_value: 0.0,
            probability_of_profit: 0.0,
            expected_loss: 0.0,
            break_even: 100.0,
            greeks: crate::model::option::Greek::default(),
        });
        sink.emit(ResultRow {
            strategy: StrategyTag::Single,
            strikes: vec![105.0],
            cost_basis: 0.0,
            premium_notional: 0.0,
            expected_value: 0.0,
            probability_of_profit: 0.0,
            expected_loss: 0.0,
            break_even: 105.0,
            greeks: crate::model::option::Greek::default(),
        });
        assert_eq!(sink.rows[0].strikes, vec![100.0]);
        assert_eq!(sink.rows[1].strikes, vec![105.0]);
    }
}
