//! Facade over the database and the profile selection.
//!
//! The presentation layer talks only to this type: it owns the "attach the
//! current profile on write, filter by it on read" policy, while the raw
//! SQL lives in the repositories. Both collaborators are injected so tests
//! can build a tracker on a scratch directory.

use std::path::Path;

use crate::db::models::{Reading, User};
use crate::db::Database;
use crate::error::StoreError;
use crate::profile::{CurrentUser, ProfileStore};
use crate::validation::{validate_reading, ReadingDraft};

const DB_FILE: &str = "tensio.sqlite3";
const PROFILE_FILE: &str = "profile.json";
const LEGACY_HISTORY_FILE: &str = "history.json";

pub struct Tracker {
    db: Database,
    profile: ProfileStore,
}

impl std::fmt::Debug for Tracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tracker").finish_non_exhaustive()
    }
}

impl Tracker {
    pub fn new(db: Database, profile: ProfileStore) -> Self {
        Self { db, profile }
    }

    /// Open (or create) the store under `data_dir` with the standard file
    /// layout. A legacy `history.json` found there is imported and removed
    /// before this returns.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = data_dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let db = Database::open(dir.join(DB_FILE), Some(dir.join(LEGACY_HISTORY_FILE)))?;
        let profile = ProfileStore::new(dir.join(PROFILE_FILE))?;

        Ok(Self::new(db, profile))
    }

    /// Validate and persist a submitted reading, stamped with the current
    /// profile (NULL when none is selected). Returns the assigned id.
    pub async fn save_reading(&self, draft: &ReadingDraft) -> Result<i64, StoreError> {
        let reading = validate_reading(draft)?;
        let user_id = self.profile.current().map(|user| user.id);
        self.db.insert_reading(&reading, user_id).await
    }

    /// Readings visible under the current selection, most recent first.
    /// Always a fresh Vec; never a live view.
    pub async fn get_readings(&self) -> Result<Vec<Reading>, StoreError> {
        let user_id = self.profile.current().map(|user| user.id);
        self.db.get_readings_for_user(user_id).await
    }

    /// Unscoped lookup by id, for snapshotting a reading before deletion.
    pub async fn get_reading_by_id(&self, id: i64) -> Result<Option<Reading>, StoreError> {
        self.db.get_reading(id).await
    }

    /// Hard delete; absent ids are a no-op so delete stays idempotent.
    pub async fn delete_reading_by_id(&self, id: i64) -> Result<(), StoreError> {
        self.db.delete_reading(id).await
    }

    /// Re-insert a snapshot taken before a delete. The snapshot's id is
    /// discarded and a fresh one minted (the old id may already be reused);
    /// its profile assignment is kept so the reading returns to the profile
    /// it was deleted from.
    pub async fn restore_reading(&self, snapshot: &Reading) -> Result<i64, StoreError> {
        let draft = ReadingDraft::new(
            snapshot.systolic,
            snapshot.diastolic,
            snapshot.pulse,
            snapshot.timestamp,
        );
        let reading = validate_reading(&draft)?;
        self.db.insert_reading(&reading, snapshot.user_id).await
    }

    pub async fn get_reading_count(&self) -> Result<i64, StoreError> {
        let user_id = self.profile.current().map(|user| user.id);
        self.db.count_readings_for_user(user_id).await
    }

    /// Delete every reading, all profiles included.
    pub async fn clear_readings(&self) -> Result<(), StoreError> {
        self.db.clear_readings().await
    }

    pub async fn get_or_create_user(&self, username: &str) -> Result<User, StoreError> {
        if username.trim().is_empty() {
            return Err(StoreError::InvalidArgument(
                "username must not be blank".into(),
            ));
        }
        self.db.get_or_create_user(username).await
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, StoreError> {
        self.db.get_all_users().await
    }

    /// Select a profile by name, creating it on first use, and persist the
    /// selection. Takes effect for subsequent queries only.
    pub async fn set_current_user(&self, username: &str) -> Result<User, StoreError> {
        let user = self.get_or_create_user(username).await?;
        self.profile.set(CurrentUser {
            id: user.id,
            username: user.username.clone(),
        })?;
        Ok(user)
    }

    pub fn clear_current_user(&self) -> Result<(), StoreError> {
        self.profile.clear()
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.profile.current()
    }
}
