//! Persisted current-profile selection.
//!
//! The selection lives in its own JSON sidecar next to the database so it
//! survives restarts independently of the tables. Clearing the selection
//! removes the file. A corrupt sidecar degrades to "no selection" rather
//! than blocking startup.

use std::{fs, path::PathBuf, sync::RwLock};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// The persisted selection: enough to scope queries and label the UI
/// without re-reading the users table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
}

pub struct ProfileStore {
    path: PathBuf,
    data: RwLock<Option<CurrentUser>>,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Result<Self, StoreError> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            match serde_json::from_str(&contents) {
                Ok(user) => Some(user),
                Err(err) => {
                    warn!(
                        "Ignoring unreadable profile selection at {}: {err}",
                        path.display()
                    );
                    None
                }
            }
        } else {
            None
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn current(&self) -> Option<CurrentUser> {
        self.data.read().unwrap().clone()
    }

    pub fn set(&self, user: CurrentUser) -> Result<(), StoreError> {
        let mut guard = self.data.write().unwrap();
        let serialized = serde_json::to_string_pretty(&user)?;
        fs::write(&self.path, serialized)?;
        *guard = Some(user);
        Ok(())
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self.data.write().unwrap();
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        *guard = None;
        Ok(())
    }
}
