//! Database query implementations

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::Result;
use crate::types::PreferenceEntry;

/// Read one preference slot
pub fn get_preference(conn: &Connection, key: &str) -> Result<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM preferences WHERE key = ?",
            params![key],
            |row| row.get(0),
        )
        .optional()?;

    Ok(value)
}

/// Write one preference slot, replacing any previous value
pub fn set_preference(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO preferences (key, value, updated_at)
        VALUES (?, ?, ?)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
        params![key, value, chrono::Utc::now().to_rfc3339()],
    )?;

    Ok(())
}

/// List every stored preference, most recently written first
pub fn list_preferences(conn: &Connection) -> Result<Vec<PreferenceEntry>> {
    let mut stmt = conn.prepare(
        "SELECT key, value, updated_at FROM preferences ORDER BY updated_at DESC, key ASC",
    )?;

    let entries = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(entries
        .into_iter()
        .filter_map(|(key, value, updated_at)| {
            chrono::DateTime::parse_from_rfc3339(&updated_at)
                .ok()
                .map(|ts| PreferenceEntry {
                    key,
                    value,
                    updated_at: ts.with_timezone(&chrono::Utc),
                })
        })
        .collect())
}
