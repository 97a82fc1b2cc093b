use crate::error::AnalyzerError;
use crate::model::expiration::ExpirationDate;
use crate::model::positive::Positive;
use crate::model::types::{ExerciseStyle, OptionStyle};
use rust_decimal::Decimal;

/// One row of an option chain: the identifier tuple plus the market quotes
/// attached to it (`spec.md` §3 "OptionContract").
#[derive(Debug, Clone)]
pub struct OptionContract {
    pub underlying_symbol: String,
    pub expiration: ExpirationDate,
    pub strike: Positive,
    pub option_style: OptionStyle,
    pub exercise_style: ExerciseStyle,
    pub bid: Option<Positive>,
    pub ask: Option<Positive>,
    pub last: Option<Positive>,
    pub mark: Option<Positive>,
    pub multiplier: Positive,
    pub days_to_expiry: Positive,
}

impl OptionContract {
    /// Validates the `bid <= mark <= ask` and `K > 0`/`T > 0` invariants from
    /// `spec.md` §3 before handing the row to the analyzer.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        underlying_symbol: impl Into<String>,
        expiration: ExpirationDate,
        strike: Positive,
        option_style: OptionStyle,
        exercise_style: ExerciseStyle,
        bid: Option<Positive>,
        ask: Option<Positive>,
        last: Option<Positive>,
        mark: Option<Positive>,
        multiplier: Positive,
        days_to_expiry: Positive,
    ) -> Result<Self, AnalyzerError> {
        if strike.is_zero() {
            return Err(AnalyzerError::ContractViolation {
                reason: "strike must be > 0".to_string(),
            });
        }
        if days_to_expiry.is_zero() {
            return Err(AnalyzerError::ContractViolation {
                reason: "days_to_expiry must be > 0".to_string(),
            });
        }
        if let (Some(b), Some(m)) = (bid, mark) {
            if b > m {
                return Err(AnalyzerError::ContractViolation {
                    reason: format!("bid {b} exceeds mark {m}"),
                });
            }
        }
        if let (Some(m), Some(a)) = (mark, ask) {
            if m > a {
                return Err(AnalyzerError::ContractViolation {
                    reason: format!("mark {m} exceeds ask {a}"),
                });
            }
        }
        Ok(OptionContract {
            underlying_symbol: underlying_symbol.into(),
            expiration,
            strike,
            option_style,
            exercise_style,
            bid,
            ask,
            last,
            mark,
            multiplier,
            days_to_expiry,
        })
    }

    pub fn time_to_expiry_years(&self) -> f64 {
        self.expiration
            .get_years()
            .map(|p| p.to_f64())
            .unwrap_or(0.0)
    }
}

/// A single point-in-time discrete cash dividend: `(time until payment, amount)`.
pub type DividendEvent = (Positive, Positive);

/// The market data surrounding a chain at the moment of analysis
/// (`spec.md` §3 "MarketContext").
#[derive(Debug, Clone)]
pub struct MarketContext {
    pub spot: Positive,
    /// Risk-free rate r(T) for the relevant term.
    pub risk_free_rate: Decimal,
    /// Cost of carry b = r - q (0 for futures; r for a discrete-dividend schedule).
    pub cost_of_carry: Decimal,
    pub sigma_estimate: Positive,
    pub discrete_dividends: Option<Vec<DividendEvent>>,
}

impl MarketContext {
    pub fn continuous_yield(&self) -> Decimal {
        self.risk_free_rate - self.cost_of_carry
    }
}

/// The full Greek set produced by a pricing model's `partials`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Greek {
    pub delta: f64,
    pub gamma: f64,
    pub theta: f64,
    pub vega: f64,
    pub rho: f64,
}
