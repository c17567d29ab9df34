//! Durable string slots keyed by name.
//!
//! # Responsibility
//! - Provide get/set/remove over named string values.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `set` overwrites unconditionally; there is no partial write.

use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Key-value slot storage.
pub trait KvRepository {
    fn get(&self, key: &str) -> RepoResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> RepoResult<()>;
    fn remove(&self, key: &str) -> RepoResult<()>;
}

impl<K: KvRepository + ?Sized> KvRepository for &K {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        (**self).remove(key)
    }
}

/// SQLite-backed slots stored in the `kv` table.
pub struct SqliteKvRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvRepository<'conn> {
    /// Wraps a connection returned by [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvRepository for SqliteKvRepository<'_> {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(())
    }
}

/// In-memory slots for tests and ephemeral sessions.
///
/// Uses `RefCell` because the core is single-threaded and the trait takes
/// `&self`.
#[derive(Debug, Default)]
pub struct MemoryKvRepository {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
}

impl MemoryKvRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent `set`/`remove` calls fail until switched off.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    fn check_writable(&self) -> RepoResult<()> {
        if self.simulate_write_error.get() {
            return Err(RepoError::Backend("simulated write error".to_string()));
        }
        Ok(())
    }
}

impl KvRepository for MemoryKvRepository {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        self.check_writable()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> RepoResult<()> {
        self.check_writable()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KvRepository, MemoryKvRepository, SqliteKvRepository};
    use crate::db::open_db_in_memory;

    #[test]
    fn sqlite_set_overwrites_and_remove_clears() {
        let conn = open_db_in_memory().unwrap();
        let kv = SqliteKvRepository::new(&conn);

        assert_eq!(kv.get("slot").unwrap(), None);
        kv.set("slot", "one").unwrap();
        kv.set("slot", "two").unwrap();
        assert_eq!(kv.get("slot").unwrap().as_deref(), Some("two"));

        kv.remove("slot").unwrap();
        assert_eq!(kv.get("slot").unwrap(), None);
    }

    #[test]
    fn memory_write_error_simulation_blocks_writes_only() {
        let kv = MemoryKvRepository::new();
        kv.set("slot", "kept").unwrap();

        kv.set_simulate_write_error(true);
        assert!(kv.set("slot", "lost").is_err());
        assert!(kv.remove("slot").is_err());
        assert_eq!(kv.get("slot").unwrap().as_deref(), Some("kept"));

        kv.set_simulate_write_error(false);
        kv.set("slot", "new").unwrap();
        assert_eq!(kv.get("slot").unwrap().as_deref(), Some("new"));
    }
}
