/// HabitRecord entity for logged activities
///
/// This module defines the HabitRecord struct that represents one logged
/// occurrence of an activity, e.g. "2 Liters Water".

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::domain::{RecordId, DomainError};

/// One logged occurrence of a tracked activity
///
/// Records are immutable once created. The JSON field names are part of the
/// on-disk format and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitRecord {
    /// Creation timestamp in milliseconds, used as the identifier
    pub id: RecordId,
    /// Name of the activity (e.g., "Drinking Water")
    pub name: String,
    /// How much was done; any finite number is accepted
    pub amount: f64,
    /// Unit for the amount (e.g., "Liters")
    pub unit: String,
    /// When the record was created, in UTC
    #[serde(with = "iso_millis")]
    pub date: DateTime<Utc>,
}

impl HabitRecord {
    /// Create a new record with validation
    ///
    /// The caller supplies the id and creation instant so the store can keep
    /// ids increasing.
    pub fn new(
        id: RecordId,
        name: String,
        amount: f64,
        unit: String,
        date: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&name)?;
        Self::validate_amount(amount)?;
        Self::validate_unit(&unit)?;

        Ok(Self {
            id,
            name,
            amount,
            unit,
            date,
        })
    }

    /// Human readable one-liner, e.g. "2 Liters Water"
    pub fn summary(&self) -> String {
        format!("{} {} {}", self.amount, self.unit, self.name)
    }

    // Validation helper methods

    pub(crate) fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }
        Ok(())
    }

    pub(crate) fn validate_unit(unit: &str) -> Result<(), DomainError> {
        if unit.trim().is_empty() {
            return Err(DomainError::InvalidUnit(
                "Unit cannot be empty".to_string()
            ));
        }
        Ok(())
    }

    /// Negative and zero amounts are fine, NaN and infinities cannot be
    /// written as JSON numbers.
    pub(crate) fn validate_amount(amount: f64) -> Result<(), DomainError> {
        if !amount.is_finite() {
            return Err(DomainError::InvalidValue {
                message: "Amount must be a finite number".to_string()
            });
        }
        Ok(())
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix
/// (`2024-03-01T08:15:00.000Z`). Reading accepts any RFC 3339 instant.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|date| date.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
