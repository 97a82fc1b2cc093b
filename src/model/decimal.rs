use crate::error::decimal::DecimalError;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

pub(crate) fn f64_to_decimal(value: f64) -> Result<Decimal, DecimalError> {
    Decimal::from_f64(value).ok_or_else(|| DecimalError::ConversionError {
        from_type: "f64".to_string(),
        to_type: "Decimal".to_string(),
        reason: format!("{value} has no exact Decimal representation"),
    })
}

pub(crate) fn decimal_to_f64(value: Decimal) -> Result<f64, DecimalError> {
    value.to_f64().ok_or_else(|| DecimalError::ConversionError {
        from_type: "Decimal".to_string(),
        to_type: "f64".to_string(),
        reason: format!("{value} has no exact f64 representation"),
    })
}
