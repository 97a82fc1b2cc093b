use crate::constants::DAYS_IN_A_YEAR;
use crate::error::DecimalError;
use crate::model::positive::Positive;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Either a relative day count or an absolute calendar expiry.
///
/// Pricing models only ever need the time-to-expiry in years; both variants
/// reduce to that via [`ExpirationDate::get_years`].
#[derive(Debug, Clone, Copy)]
pub enum ExpirationDate {
    Days(Positive),
    DateTime(DateTime<Utc>),
}

impl ExpirationDate {
    pub fn get_days(&self) -> Result<Positive, DecimalError> {
        match self {
            ExpirationDate::Days(days) => Ok(*days),
            ExpirationDate::DateTime(dt) => {
                let now = Utc::now();
                let duration = *dt - now;
                let days = duration.num_seconds() as f64 / 86_400.0;
                Positive::from_f64(days).map_err(|e| DecimalError::ConversionError {
                    from_type: "DateTime<Utc>".to_string(),
                    to_type: "Positive".to_string(),
                    reason: e,
                })
            }
        }
    }

    pub fn get_years(&self) -> Result<Positive, DecimalError> {
        let days = self.get_days()?;
        Positive::from_f64(days.to_f64() / DAYS_IN_A_YEAR as f64).map_err(|e| {
            DecimalError::ConversionError {
                from_type: "days".to_string(),
                to_type: "years".to_string(),
                reason: e,
            }
        })
    }
}

impl PartialEq for ExpirationDate {
    fn eq(&self, other: &Self) -> bool {
        let a = self.get_days().unwrap_or(Positive::ZERO);
        let b = other.get_days().unwrap_or(Positive::ZERO);
        a == b
    }
}

impl Eq for ExpirationDate {}

impl PartialOrd for ExpirationDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExpirationDate {
    fn cmp(&self, other: &Self) -> Ordering {
        let a = self.get_days().unwrap_or(Positive::ZERO);
        let b = other.get_days().unwrap_or(Positive::ZERO);
        a.cmp(&b)
    }
}
