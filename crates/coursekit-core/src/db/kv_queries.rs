//! Key/value queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const UPSERT_VALUE_SQL: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_store WHERE key = ?1";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv_store WHERE key = ?1";

impl super::Database {
    /// Stores a value under the key, replacing any previous value.
    pub fn put_value(&mut self, key: &str, value: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            UPSERT_VALUE_SQL,
            params![key, value, Timestamp::now().to_string()],
        )
        .db_context("Failed to store value")?;

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Reads the value stored under the key.
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read value")
    }

    /// Deletes the value stored under the key. Returns true when a value
    /// existed.
    pub fn delete_value(&mut self, key: &str) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_VALUE_SQL, params![key])
            .db_context("Failed to delete value")?;
        Ok(deleted > 0)
    }
}
