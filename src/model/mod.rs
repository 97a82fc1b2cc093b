//! Core data structures: the `Positive` newtype, expiry handling, contract
//! and market-context rows, and the small set of enums (`OptionStyle`,
//! `Side`, `ExerciseStyle`) shared by every other module.

pub(crate) mod decimal;
pub mod expiration;
pub mod option;
pub mod positive;
pub mod types;

pub use expiration::ExpirationDate;
pub use option::{DividendEvent, Greek, MarketContext, OptionContract};
pub use positive::Positive;
pub use types::{ExerciseStyle, OptionStyle, Side};
