use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named profile. Created on first reference, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created: DateTime<Utc>,
}
