use thiserror::Error;

/// Errors raised while converting or operating on `Decimal`/`Positive` values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecimalError {
    #[error("Invalid decimal value {value}: {reason}")]
    InvalidValue { value: f64, reason: String },

    #[error("Failed to convert {from_type} to {to_type}: {reason}")]
    ConversionError {
        from_type: String,
        to_type: String,
        reason: String,
    },

    #[error("Decimal value {value} is out of bounds (min: {min}, max: {max})")]
    OutOfBounds { value: f64, min: f64, max: f64 },
}

impl DecimalError {
    pub fn invalid_value(value: f64, reason: &str) -> Self {
        DecimalError::InvalidValue {
            value,
            reason: reason.to_string(),
        }
    }

    pub fn out_of_bounds(value: f64, min: f64, max: f64) -> Self {
        DecimalError::OutOfBounds { value, min, max }
    }
}

pub type DecimalResult<T> = Result<T, DecimalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_mention_the_offending_value() {
        let err = DecimalError::invalid_value(-1.0, "cannot be negative");
        assert!(err.to_string().contains("-1"));
        let err = DecimalError::out_of_bounds(150.0, 0.0, 100.0);
        assert!(err.to_string().contains("150"));
    }
}
