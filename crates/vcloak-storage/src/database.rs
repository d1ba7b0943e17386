//! Database connection and operations

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;

use crate::migrations::run_migrations;
use crate::Result;

pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode so a second client process can read while we write
        let _: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

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

    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }

    /// Read a single entry for an origin
    pub fn get_item(&self, origin: &str, key: &str) -> Result<Option<String>> {
        self.with_connection(|conn| {
            let value = conn
                .query_row(
                    "SELECT value FROM local_storage WHERE origin = ?1 AND key = ?2",
                    [origin, key],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(value)
        })
    }

    /// Write a single entry, replacing any previous value
    pub fn set_item(&self, origin: &str, key: &str, value: &str) -> Result<()> {
        let updated_at = Utc::now().to_rfc3339();
        self.with_connection(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO local_storage (origin, key, value, updated_at)
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![origin, key, value, updated_at],
            )?;
            Ok(())
        })
    }

    /// Remove a single entry. Removing a missing key is not an error.
    pub fn remove_item(&self, origin: &str, key: &str) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute(
                "DELETE FROM local_storage WHERE origin = ?1 AND key = ?2",
                [origin, key],
            )?;
            Ok(())
        })
    }

    /// List the keys stored for an origin
    pub fn keys(&self, origin: &str) -> Result<Vec<String>> {
        self.with_connection(|conn| {
            let mut stmt =
                conn.prepare("SELECT key FROM local_storage WHERE origin = ?1 ORDER BY key")?;
            let keys = stmt
                .query_map([origin], |row| row.get(0))?
                .collect::<std::result::Result<Vec<String>, _>>()?;
            Ok(keys)
        })
    }
}

impl Clone for Database {
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
    fn test_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        db.with_connection(|conn| {
            let count: i32 =
                conn.query_row("SELECT COUNT(*) FROM local_storage", [], |row| row.get(0))?;
            assert_eq!(count, 0);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_items_are_scoped_by_origin() {
        let db = Database::open_in_memory().unwrap();
        db.set_item("https://a.example", "access_token", "one")
            .unwrap();
        db.set_item("https://b.example", "access_token", "two")
            .unwrap();

        assert_eq!(
            db.get_item("https://a.example", "access_token").unwrap(),
            Some("one".to_string())
        );
        assert_eq!(
            db.get_item("https://b.example", "access_token").unwrap(),
            Some("two".to_string())
        );

        db.remove_item("https://a.example", "access_token").unwrap();
        assert_eq!(db.get_item("https://a.example", "access_token").unwrap(), None);
        assert_eq!(db.keys("https://b.example").unwrap(), vec!["access_token"]);
    }

    #[test]
    fn test_reopen_keeps_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vcloak.db");

        {
            let db = Database::open(&path).unwrap();
            db.set_item("https://vcloak.test", "user", "{}").unwrap();
        }

        let db = Database::open(&path).unwrap();
        assert_eq!(
            db.get_item("https://vcloak.test", "user").unwrap(),
            Some("{}".to_string())
        );
    }
}
