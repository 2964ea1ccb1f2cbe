//! Key-value repository contract and its SQLite implementation.
//!
//! # Invariants
//! - Prefix matching is exact (no `LIKE` wildcards).
//! - `put_all` either writes every entry or none.

use crate::repo::RepoResult;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

/// Repository interface over `key -> JSON text` entries.
pub trait KvRepository {
    fn get(&self, key: &str) -> RepoResult<Option<String>>;
    fn put(&self, key: &str, value: &str) -> RepoResult<()>;
    /// Writes all entries in one transaction; returns the number written.
    fn put_all(&self, entries: &[(String, String)]) -> RepoResult<usize>;
    /// Returns whether an entry was removed.
    fn delete(&self, key: &str) -> RepoResult<bool>;
    /// Entries whose key starts with `prefix`, ordered by key.
    fn list_prefix(&self, prefix: &str) -> RepoResult<Vec<(String, String)>>;
}

/// SQLite-backed key-value repository over the `kv_entries` table.
pub struct SqliteKvRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

const UPSERT_SQL: &str = "INSERT INTO kv_entries (key, value, updated_at)
    VALUES (?1, ?2, ?3)
    ON CONFLICT(key) DO UPDATE SET
        value = excluded.value,
        updated_at = excluded.updated_at;";

impl KvRepository for SqliteKvRepository<'_> {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn
            .execute(UPSERT_SQL, params![key, value, now_epoch_ms()])?;
        Ok(())
    }

    fn put_all(&self, entries: &[(String, String)]) -> RepoResult<usize> {
        let tx = self.conn.unchecked_transaction()?;
        let updated_at = now_epoch_ms();
        {
            let mut stmt = tx.prepare(UPSERT_SQL)?;
            for (key, value) in entries {
                stmt.execute(params![key, value, updated_at])?;
            }
        }
        tx.commit()?;
        Ok(entries.len())
    }

    fn delete(&self, key: &str) -> RepoResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(removed > 0)
    }

    fn list_prefix(&self, prefix: &str) -> RepoResult<Vec<(String, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT key, value
             FROM kv_entries
             WHERE substr(key, 1, length(?1)) = ?1
             ORDER BY key ASC;",
        )?;
        let rows = stmt.query_map([prefix], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;
        let entries = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }
}

fn now_epoch_ms() -> i64 {
    Utc::now().timestamp_millis()
}
