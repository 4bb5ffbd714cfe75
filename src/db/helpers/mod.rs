use chrono::{DateTime, Utc};

use crate::error::StoreError;

pub(crate) fn parse_datetime(value: &str, field: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| StoreError::Corrupt(format!("invalid {field} '{value}': {err}")))
}
