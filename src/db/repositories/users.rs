use chrono::Utc;
use rusqlite::{params, Row};

use crate::db::{connection::Database, helpers::parse_datetime, models::User};
use crate::error::StoreError;

fn row_to_user(row: &Row) -> Result<User, StoreError> {
    let created: String = row.get("created")?;

    Ok(User {
        id: row.get("id")?,
        username: row.get("username")?,
        created: parse_datetime(&created, "created")?,
    })
}

impl Database {
    /// Find a user by exact, case-sensitive username, creating it on first
    /// reference.
    pub async fn get_or_create_user(&self, username: &str) -> Result<User, StoreError> {
        let username = username.to_string();
        let created = Utc::now();
        self.execute(move |conn| {
            let existing = {
                let mut stmt = conn.prepare(
                    "SELECT id, username, created FROM users WHERE username = ?1",
                )?;
                let mut rows = stmt.query(params![username])?;
                match rows.next()? {
                    Some(row) => Some(row_to_user(row)?),
                    None => None,
                }
            };

            if let Some(user) = existing {
                return Ok(user);
            }

            conn.execute(
                "INSERT INTO users (username, created) VALUES (?1, ?2)",
                params![username, created.to_rfc3339()],
            )?;

            Ok(User {
                id: conn.last_insert_rowid(),
                username,
                created,
            })
        })
        .await
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, StoreError> {
        self.execute(|conn| {
            let mut stmt =
                conn.prepare("SELECT id, username, created FROM users ORDER BY username ASC")?;

            let mut rows = stmt.query([])?;
            let mut users = Vec::new();
            while let Some(row) = rows.next()? {
                users.push(row_to_user(row)?);
            }

            Ok(users)
        })
        .await
    }
}
