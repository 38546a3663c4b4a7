//! Key-value store operations

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;

use crate::migrations::run_migrations;
use crate::Result;

pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for better concurrent performance
        let _: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

        // Run migrations
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Read the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock();
        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Store `value` under `key`, overwriting any prior value.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let updated_at = Utc::now().to_rfc3339();
        let conn = self.conn.lock();
        conn.execute(
            "INSERT OR REPLACE INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![key, value, updated_at],
        )?;
        Ok(())
    }

    /// Remove the entry under `key`. Removing a missing key is not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}

impl Clone for Store {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_roundtrip() {
        let store = Store::open_in_memory().unwrap();

        assert_eq!(store.get("user").unwrap(), None);

        store.set("user", r#"{"userID":1}"#).unwrap();
        assert_eq!(store.get("user").unwrap().as_deref(), Some(r#"{"userID":1}"#));
    }

    #[test]
    fn test_set_overwrites() {
        let store = Store::open_in_memory().unwrap();

        store.set("user", "first").unwrap();
        store.set("user", "second").unwrap();
        assert_eq!(store.get("user").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_remove() {
        let store = Store::open_in_memory().unwrap();

        store.set("user", "value").unwrap();
        store.remove("user").unwrap();
        assert_eq!(store.get("user").unwrap(), None);

        // Removing an absent key is fine
        store.remove("user").unwrap();
    }

    #[test]
    fn test_reopen_sees_prior_writes() {
        let path = std::env::temp_dir().join(format!("tripline-{}.db", uuid::Uuid::new_v4()));

        {
            let store = Store::open(&path).unwrap();
            store.set("user", "persisted").unwrap();
        }

        let store = Store::open(&path).unwrap();
        assert_eq!(store.get("user").unwrap().as_deref(), Some("persisted"));

        let _ = std::fs::remove_file(&path);
    }
}
