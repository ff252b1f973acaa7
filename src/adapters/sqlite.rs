//! SQLite-backed user cache.
//!
//! One table, `users_table`, keyed by an auto-incrementing `local_id`.
//! Nested parts of a profile are kept as JSON text columns.

use crate::domain::model::User;
use crate::domain::ports::UserStore;
use crate::utils::error::{RandomUserError, Result};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS users_table (
    local_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    uuid        TEXT,
    gender      TEXT,
    name        TEXT,
    location    TEXT,
    email       TEXT,
    login       TEXT,
    dob         TEXT,
    phone       TEXT,
    cell        TEXT,
    picture     TEXT,
    nat         TEXT,
    fetched_at  TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_users_uuid ON users_table (uuid);
"#;

const SELECT_COLUMNS: &str =
    "gender, name, location, email, login, dob, phone, cell, picture, nat";

#[derive(Clone)]
pub struct SqliteUserStore {
    conn: Arc<Mutex<Connection>>,
    path: Option<PathBuf>,
}

impl std::fmt::Debug for SqliteUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteUserStore")
            .field("path", &self.path)
            .finish()
    }
}

impl SqliteUserStore {
    /// Open (creating if needed) the database file and apply the schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA_SQL)?;
        tracing::debug!(path = %path.display(), "User cache opened");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: Some(path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA_SQL)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            path: None,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run `f` against the connection on the blocking pool.
    async fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn.lock().map_err(|_| RandomUserError::StoreError {
                message: "database connection lock poisoned".to_string(),
            })?;
            f(&*guard)
        })
        .await
        .map_err(|e| RandomUserError::StoreError {
            message: format!("database task failed: {}", e),
        })?
    }
}

struct RawRow {
    gender: Option<String>,
    name: Option<String>,
    location: Option<String>,
    email: Option<String>,
    login: Option<String>,
    dob: Option<String>,
    phone: Option<String>,
    cell: Option<String>,
    picture: Option<String>,
    nat: Option<String>,
}

impl RawRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            gender: row.get(0)?,
            name: row.get(1)?,
            location: row.get(2)?,
            email: row.get(3)?,
            login: row.get(4)?,
            dob: row.get(5)?,
            phone: row.get(6)?,
            cell: row.get(7)?,
            picture: row.get(8)?,
            nat: row.get(9)?,
        })
    }

    fn into_user(self) -> Result<User> {
        Ok(User {
            gender: self.gender,
            name: from_json(self.name)?,
            location: from_json(self.location)?,
            email: self.email,
            login: from_json(self.login)?,
            dob: from_json(self.dob)?,
            phone: self.phone,
            cell: self.cell,
            picture: from_json(self.picture)?,
            nat: self.nat,
        })
    }
}

fn to_json<T: Serialize>(value: &Option<T>) -> Result<Option<String>> {
    value
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(Into::into)
}

// unparseable JSON columns are a storage fault
fn from_json<T: DeserializeOwned>(column: Option<String>) -> Result<Option<T>> {
    column
        .as_deref()
        .map(serde_json::from_str)
        .transpose()
        .map_err(|e| RandomUserError::StoreError {
            message: format!("corrupt cached record: {}", e),
        })
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn insert_user(&self, user: &User) -> Result<()> {
        let user = user.clone();
        self.with_conn(move |conn| {
            conn.execute(
                r#"
                INSERT OR REPLACE INTO users_table
                    (uuid, gender, name, location, email, login, dob, phone, cell, picture, nat, fetched_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
                "#,
                params![
                    user.uuid(),
                    user.gender,
                    to_json(&user.name)?,
                    to_json(&user.location)?,
                    user.email,
                    to_json(&user.login)?,
                    to_json(&user.dob)?,
                    user.phone,
                    user.cell,
                    to_json(&user.picture)?,
                    user.nat,
                    Utc::now().to_rfc3339(),
                ],
            )?;
            tracing::debug!(uuid = user.uuid().unwrap_or("-"), "Stored user");
            Ok(())
        })
        .await
    }

    async fn all_users(&self) -> Result<Vec<User>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {} FROM users_table ORDER BY local_id DESC",
                SELECT_COLUMNS
            ))?;
            let rows = stmt
                .query_map([], RawRow::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows.into_iter().map(RawRow::into_user).collect()
        })
        .await
    }

    async fn find_user(&self, uuid: &str) -> Result<Option<User>> {
        let uuid = uuid.to_string();
        self.with_conn(move |conn| {
            conn.query_row(
                &format!(
                    "SELECT {} FROM users_table WHERE uuid = ?1 ORDER BY local_id DESC LIMIT 1",
                    SELECT_COLUMNS
                ),
                params![uuid],
                RawRow::from_row,
            )
            .optional()?
            .map(RawRow::into_user)
            .transpose()
        })
        .await
    }

    async fn clear(&self) -> Result<usize> {
        self.with_conn(|conn| Ok(conn.execute("DELETE FROM users_table", [])?))
            .await
    }
}
