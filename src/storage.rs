//! The persistent key-value storage that backs the transaction store.
//!
//! Values are opaque strings addressed by a fixed key. The store writes the
//! whole record on every save, so implementations only need to support
//! reading and overwriting a single value per key.

use std::collections::HashMap;

use rusqlite::{Connection, OptionalExtension};

use crate::Error;

/// Reads and overwrites string values by key.
pub trait KeyValueStorage: Send {
    /// Get the value stored under `key`, or `None` if nothing has been stored.
    ///
    /// # Errors
    /// Returns an error if the underlying storage could not be read.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Store `value` under `key`, replacing any existing value.
    ///
    /// # Errors
    /// Returns an error if the underlying storage could not be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
}

/// Key-value storage in a table of a SQLite database.
#[derive(Debug)]
pub struct SqliteStorage {
    connection: Connection,
}

impl SqliteStorage {
    /// Wrap `connection`, creating the key-value table if it does not exist.
    ///
    /// # Errors
    /// Returns an error if the table cannot be created.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        create_kv_table(&connection)?;

        Ok(Self { connection })
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        self.connection
            .query_row(
                "SELECT value FROM kv_store WHERE key = :key",
                &[(":key", &key)],
                |row| row.get(0),
            )
            .optional()
            .map_err(|error| error.into())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.connection.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (key, value),
        )?;

        Ok(())
    }
}

/// Create the key-value table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
fn create_kv_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Key-value storage that lives only as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.entries.insert(key.to_owned(), value.to_owned());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::{KeyValueStorage, MemoryStorage, SqliteStorage};

    fn get_test_storage() -> SqliteStorage {
        let conn = Connection::open_in_memory().unwrap();
        SqliteStorage::new(conn).unwrap()
    }

    #[test]
    fn sqlite_get_missing_key_returns_none() {
        let storage = get_test_storage();

        assert_eq!(storage.get("transactions"), Ok(None));
    }

    #[test]
    fn sqlite_set_overwrites_existing_value() {
        let mut storage = get_test_storage();

        storage.set("transactions", "[]").unwrap();
        storage.set("transactions", "[1]").unwrap();

        assert_eq!(storage.get("transactions"), Ok(Some("[1]".to_owned())));
    }

    #[test]
    fn sqlite_keys_are_independent() {
        let mut storage = get_test_storage();

        storage.set("a", "first").unwrap();
        storage.set("b", "second").unwrap();

        assert_eq!(storage.get("a"), Ok(Some("first".to_owned())));
        assert_eq!(storage.get("b"), Ok(Some("second".to_owned())));
    }

    #[test]
    fn sqlite_table_creation_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        let mut storage = SqliteStorage::new(conn).unwrap();
        storage.set("transactions", "[]").unwrap();

        let storage = SqliteStorage::new(storage.connection).unwrap();

        assert_eq!(storage.get("transactions"), Ok(Some("[]".to_owned())));
    }

    #[test]
    fn memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();

        assert_eq!(storage.get("transactions"), Ok(None));
        storage.set("transactions", "[]").unwrap();
        assert_eq!(storage.get("transactions"), Ok(Some("[]".to_owned())));
    }
}
