use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a contract grants the right to buy or to sell the underlying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, Ord, PartialOrd)]
pub enum OptionStyle {
    #[default]
    Call,
    Put,
}

impl fmt::Display for OptionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionStyle::Call => write!(f, "Call"),
            OptionStyle::Put => write!(f, "Put"),
        }
    }
}

/// Directional exposure of a position: long (bought) or short (sold/written).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Side {
    #[default]
    Long,
    Short,
}

/// Exercise style: European (at expiry only) or American (any time up to expiry).
///
/// `spec.md`'s Non-goals rule out path-dependent exotics (Bermuda, Asian,
/// Barrier, ...); only the vanilla two styles survive here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExerciseStyle {
    #[default]
    European,
    American,
}

impl ExerciseStyle {
    pub fn is_european(&self) -> bool {
        matches!(self, ExerciseStyle::European)
    }
}
