//! Blood pressure reading data model.
//!
//! Represents one persisted measurement. The `category` column is reserved
//! for a future server-side classification and is always NULL at write
//! time; display categories are derived on read by the `analysis` module.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub id: i64,
    pub systolic: i64,
    pub diastolic: i64,
    pub pulse: i64,
    pub timestamp: DateTime<Utc>,
    pub category: Option<String>,
    /// NULL for readings recorded with no profile selected.
    pub user_id: Option<i64>,
}
