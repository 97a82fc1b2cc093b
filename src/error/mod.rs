//! Error types for the pricing-and-analysis pipeline.
//!
//! Each component family gets its own `thiserror`-derived enum, following
//! the same shape: `#[error(...)]` variants, constructor helper methods, and
//! `#[from]` conversions chaining into the layer above it. `AnalyzerError` is
//! the top of the chain and is what [`crate::calculator::Calculator::analyze`]
//! returns.

pub mod analyzer;
pub mod chain;
pub mod decimal;
pub mod pricing;
pub mod volatility;

pub use analyzer::{AnalyzerError, AnalyzerResult};
pub use chain::{ChainError, ChainResult};
pub use decimal::{DecimalError, DecimalResult};
pub use pricing::{PricingError, PricingResult};
pub use volatility::{VolatilityError, VolatilityResult};
