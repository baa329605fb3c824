use anyhow::Result;
use chrono::Utc;
use rusqlite::{OptionalExtension, params};

use super::Database;

impl Database {
    pub fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Returns whether a value was present.
    pub fn remove_slot(&self, key: &str) -> Result<bool> {
        let count = self
            .conn
            .execute("DELETE FROM slots WHERE key = ?1", params![key])?;
        Ok(count > 0)
    }
}
