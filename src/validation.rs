//! Validation and normalization of raw reading input.
//!
//! Form input and legacy history entries arrive loosely typed: numbers may
//! be strings, the timestamp may be an RFC 3339 string or epoch
//! milliseconds, and old exports spell the timestamp field `date`. This
//! module turns that shape into a typed [`NewReading`] or rejects it with a
//! field-level error. It performs no I/O; id and user assignment belong to
//! the store.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing '{0}'")]
    MissingField(&'static str),

    #[error("'{0}' must be a number")]
    InvalidNumber(&'static str),

    #[error("timestamp must be an RFC 3339 string or epoch milliseconds")]
    InvalidTimestamp,
}

/// A reading as submitted, before validation. Every field is optional and
/// untyped so deserialization itself never fails on bad form input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadingDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub systolic: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diastolic: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pulse: Option<Value>,
    /// Legacy exports used `date` for this field.
    #[serde(default, alias = "date", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
}

impl ReadingDraft {
    /// Convenience constructor for callers that already hold typed values.
    pub fn new(systolic: i64, diastolic: i64, pulse: i64, timestamp: DateTime<Utc>) -> Self {
        Self {
            systolic: Some(Value::from(systolic)),
            diastolic: Some(Value::from(diastolic)),
            pulse: Some(Value::from(pulse)),
            timestamp: Some(Value::String(timestamp.to_rfc3339())),
        }
    }
}

/// A validated reading, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReading {
    pub systolic: i64,
    pub diastolic: i64,
    pub pulse: i64,
    pub timestamp: DateTime<Utc>,
}

/// Validate and normalize a draft reading.
pub fn validate_reading(draft: &ReadingDraft) -> Result<NewReading, ValidationError> {
    let systolic = coerce_number(require(&draft.systolic, "systolic")?, "systolic")?;
    let diastolic = coerce_number(require(&draft.diastolic, "diastolic")?, "diastolic")?;
    let pulse = coerce_number(require(&draft.pulse, "pulse")?, "pulse")?;
    let timestamp = coerce_timestamp(require(&draft.timestamp, "timestamp")?)?;

    Ok(NewReading {
        systolic,
        diastolic,
        pulse,
        timestamp,
    })
}

fn require<'a>(
    value: &'a Option<Value>,
    field: &'static str,
) -> Result<&'a Value, ValidationError> {
    value.as_ref().ok_or(ValidationError::MissingField(field))
}

/// Accepts a JSON number or a numeric string; fractional values are rounded
/// to the nearest integer.
fn coerce_number(value: &Value, field: &'static str) -> Result<i64, ValidationError> {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                Ok(v)
            } else {
                n.as_f64()
                    .filter(|f| f.is_finite())
                    .map(|f| f.round() as i64)
                    .ok_or(ValidationError::InvalidNumber(field))
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(v) = trimmed.parse::<i64>() {
                Ok(v)
            } else {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.round() as i64)
                    .ok_or(ValidationError::InvalidNumber(field))
            }
        }
        _ => Err(ValidationError::InvalidNumber(field)),
    }
}

fn coerce_timestamp(value: &Value) -> Result<DateTime<Utc>, ValidationError> {
    match value {
        Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| ValidationError::InvalidTimestamp),
        Value::Number(n) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
            .ok_or(ValidationError::InvalidTimestamp),
        _ => Err(ValidationError::InvalidTimestamp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_from_json(raw: &str) -> ReadingDraft {
        serde_json::from_str(raw).expect("draft json must parse")
    }

    #[test]
    fn accepts_typed_values() {
        let now = Utc::now();
        let reading = validate_reading(&ReadingDraft::new(120, 80, 70, now)).unwrap();
        assert_eq!(reading.systolic, 120);
        assert_eq!(reading.diastolic, 80);
        assert_eq!(reading.pulse, 70);
        assert_eq!(reading.timestamp.timestamp(), now.timestamp());
    }

    #[test]
    fn coerces_numeric_strings() {
        let draft = draft_from_json(
            r#"{"systolic": "118", "diastolic": " 76 ", "pulse": "72.4",
                "timestamp": "2025-06-01T08:30:00Z"}"#,
        );
        let reading = validate_reading(&draft).unwrap();
        assert_eq!(reading.systolic, 118);
        assert_eq!(reading.diastolic, 76);
        assert_eq!(reading.pulse, 72);
    }

    #[test]
    fn missing_field_is_reported_by_name() {
        let draft = draft_from_json(r#"{"systolic": 120, "diastolic": 80, "pulse": 70}"#);
        assert_eq!(
            validate_reading(&draft),
            Err(ValidationError::MissingField("timestamp"))
        );

        let draft = draft_from_json(
            r#"{"diastolic": 80, "pulse": 70, "timestamp": "2025-06-01T08:30:00Z"}"#,
        );
        assert_eq!(
            validate_reading(&draft),
            Err(ValidationError::MissingField("systolic"))
        );
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        let draft = draft_from_json(
            r#"{"systolic": "abc", "diastolic": 80, "pulse": 70,
                "timestamp": "2025-06-01T08:30:00Z"}"#,
        );
        assert_eq!(
            validate_reading(&draft),
            Err(ValidationError::InvalidNumber("systolic"))
        );

        let draft = draft_from_json(
            r#"{"systolic": 120, "diastolic": true, "pulse": 70,
                "timestamp": "2025-06-01T08:30:00Z"}"#,
        );
        assert_eq!(
            validate_reading(&draft),
            Err(ValidationError::InvalidNumber("diastolic"))
        );
    }

    #[test]
    fn legacy_date_field_is_accepted() {
        let draft = draft_from_json(
            r#"{"systolic": 120, "diastolic": 80, "pulse": 70,
                "date": "2024-11-02T19:15:00+00:00"}"#,
        );
        let reading = validate_reading(&draft).unwrap();
        assert_eq!(reading.timestamp.to_rfc3339(), "2024-11-02T19:15:00+00:00");
    }

    #[test]
    fn epoch_millis_timestamp_is_accepted() {
        let draft = draft_from_json(
            r#"{"systolic": 120, "diastolic": 80, "pulse": 70, "timestamp": 1717230600000}"#,
        );
        let reading = validate_reading(&draft).unwrap();
        assert_eq!(reading.timestamp.timestamp_millis(), 1_717_230_600_000);
    }

    #[test]
    fn unparseable_timestamp_is_rejected() {
        let draft = draft_from_json(
            r#"{"systolic": 120, "diastolic": 80, "pulse": 70, "timestamp": "yesterday"}"#,
        );
        assert_eq!(
            validate_reading(&draft),
            Err(ValidationError::InvalidTimestamp)
        );

        // JSON null deserializes to an absent field, not an invalid one.
        let draft = draft_from_json(
            r#"{"systolic": 120, "diastolic": 80, "pulse": 70, "timestamp": null}"#,
        );
        assert_eq!(
            validate_reading(&draft),
            Err(ValidationError::MissingField("timestamp"))
        );
    }
}
