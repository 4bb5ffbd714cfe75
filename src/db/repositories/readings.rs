use rusqlite::{params, Row};

use crate::db::{connection::Database, helpers::parse_datetime, models::Reading};
use crate::error::StoreError;
use crate::validation::NewReading;

fn row_to_reading(row: &Row) -> Result<Reading, StoreError> {
    let timestamp: String = row.get("timestamp")?;

    Ok(Reading {
        id: row.get("id")?,
        systolic: row.get("systolic")?,
        diastolic: row.get("diastolic")?,
        pulse: row.get("pulse")?,
        timestamp: parse_datetime(&timestamp, "timestamp")?,
        category: row.get("category")?,
        user_id: row.get("user_id")?,
    })
}

impl Database {
    /// Insert a validated reading and return its assigned id. `category`
    /// is written NULL; it is derived on display, not stored.
    pub async fn insert_reading(
        &self,
        reading: &NewReading,
        user_id: Option<i64>,
    ) -> Result<i64, StoreError> {
        let record = reading.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO readings (systolic, diastolic, pulse, timestamp, category, user_id)
                 VALUES (?1, ?2, ?3, ?4, NULL, ?5)",
                params![
                    record.systolic,
                    record.diastolic,
                    record.pulse,
                    record.timestamp.to_rfc3339(),
                    user_id,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
        .await
    }

    /// All readings for one profile (NULL user id means the default,
    /// unassigned profile), most recent first.
    pub async fn get_readings_for_user(
        &self,
        user_id: Option<i64>,
    ) -> Result<Vec<Reading>, StoreError> {
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, systolic, diastolic, pulse, timestamp, category, user_id
                 FROM readings
                 WHERE user_id IS ?1
                 ORDER BY timestamp DESC, id DESC",
            )?;

            let mut rows = stmt.query(params![user_id])?;
            let mut readings = Vec::new();
            while let Some(row) = rows.next()? {
                readings.push(row_to_reading(row)?);
            }

            Ok(readings)
        })
        .await
    }

    /// Lookup by id across all profiles. Used for undo snapshots, so it is
    /// deliberately unscoped.
    pub async fn get_reading(&self, id: i64) -> Result<Option<Reading>, StoreError> {
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, systolic, diastolic, pulse, timestamp, category, user_id
                 FROM readings
                 WHERE id = ?1",
            )?;

            let mut rows = stmt.query(params![id])?;
            match rows.next()? {
                Some(row) => Ok(Some(row_to_reading(row)?)),
                None => Ok(None),
            }
        })
        .await
    }

    /// Hard delete. Deleting an id that does not exist is a no-op.
    pub async fn delete_reading(&self, id: i64) -> Result<(), StoreError> {
        self.execute(move |conn| {
            conn.execute("DELETE FROM readings WHERE id = ?1", params![id])?;
            Ok(())
        })
        .await
    }

    pub async fn count_readings_for_user(&self, user_id: Option<i64>) -> Result<i64, StoreError> {
        self.execute(move |conn| {
            let count = conn.query_row(
                "SELECT COUNT(*) FROM readings WHERE user_id IS ?1",
                params![user_id],
                |row| row.get(0),
            )?;
            Ok(count)
        })
        .await
    }

    /// Wipe the whole table, every profile included. Reset/testing tool.
    pub async fn clear_readings(&self) -> Result<(), StoreError> {
        self.execute(|conn| {
            conn.execute("DELETE FROM readings", [])?;
            Ok(())
        })
        .await
    }
}
