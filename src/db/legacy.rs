//! One-time import of the legacy flat-list history.
//!
//! Early builds kept the whole history as a single JSON array of
//! `{systolic, diastolic, pulse, date}` objects. On first open the file is
//! imported row by row (original timestamps preserved, fresh sequential
//! ids) and then deleted. The whole batch runs in one transaction so a
//! malformed file aborts the import without leaving a partial history.

use std::fs;
use std::path::Path;

use log::info;
use rusqlite::{params, Connection};

use crate::error::StoreError;
use crate::validation::{validate_reading, ReadingDraft};

pub(crate) fn import_legacy_history(
    conn: &mut Connection,
    path: &Path,
) -> Result<usize, StoreError> {
    if !path.exists() {
        return Ok(0);
    }

    let raw = fs::read_to_string(path)?;
    let drafts: Vec<ReadingDraft> = serde_json::from_str(&raw)?;

    let tx = conn.transaction()?;
    let mut imported = 0;
    for draft in &drafts {
        let reading = validate_reading(draft)?;
        tx.execute(
            "INSERT INTO readings (systolic, diastolic, pulse, timestamp)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                reading.systolic,
                reading.diastolic,
                reading.pulse,
                reading.timestamp.to_rfc3339(),
            ],
        )?;
        imported += 1;
    }
    tx.commit()?;

    fs::remove_file(path)?;
    info!(
        "Imported {imported} readings from legacy history at {}",
        path.display()
    );

    Ok(imported)
}
