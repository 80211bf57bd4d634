//! Raw and JSON-typed access to named slots.
//!
//! # Responsibility
//! - Persist one text value per named key in the `slots` table.
//! - Layer serde encoding/decoding on top for typed callers.
//!
//! # Invariants
//! - A slot holds at most one value; writes replace unconditionally.
//! - Corrupt stored JSON is reported as `SlotRead::Corrupt`, never as a
//!   hard error; the caller decides whether to reseed or ignore.

use crate::store::StoreResult;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Outcome of a typed slot read.
#[derive(Debug)]
pub enum SlotRead<T> {
    /// No value stored under the key.
    Absent,
    /// A value is stored but does not decode as the requested type.
    Corrupt,
    Value(T),
}

impl<T> SlotRead<T> {
    /// Collapses `Absent` and `Corrupt` into `None`.
    ///
    /// Suits scratch slots owned by wizard flows, where a stale or
    /// malformed blob is equivalent to "not started".
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Corrupt => None,
        }
    }
}

/// Reads the raw text stored under `key`, if any.
pub fn read_slot_text(conn: &Connection, key: &str) -> StoreResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM slots WHERE key = ?1;", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

/// Writes `value` under `key`, replacing any prior value.
pub fn write_slot_text(conn: &Connection, key: &str, value: &str) -> StoreResult<()> {
    conn.execute(
        "INSERT INTO slots (key, value, updated_at)
         VALUES (?1, ?2, strftime('%s', 'now') * 1000)
         ON CONFLICT (key) DO UPDATE
         SET value = excluded.value,
             updated_at = excluded.updated_at;",
        params![key, value],
    )?;
    Ok(())
}

/// Deletes the slot under `key`.
///
/// Returns `true` when a value was present and removed.
pub fn remove_slot(conn: &Connection, key: &str) -> StoreResult<bool> {
    let changed = conn.execute("DELETE FROM slots WHERE key = ?1;", [key])?;
    Ok(changed > 0)
}

/// Reads and decodes the JSON value stored under `key`.
pub fn read_slot_json<T: DeserializeOwned>(
    conn: &Connection,
    key: &str,
) -> StoreResult<SlotRead<T>> {
    let Some(text) = read_slot_text(conn, key)? else {
        return Ok(SlotRead::Absent);
    };

    match serde_json::from_str(&text) {
        Ok(value) => Ok(SlotRead::Value(value)),
        Err(err) => {
            warn!("event=slot_read module=store status=corrupt key={key} error={err}");
            Ok(SlotRead::Corrupt)
        }
    }
}

/// Encodes `value` as JSON and writes it under `key`.
pub fn write_slot_json<T: Serialize>(conn: &Connection, key: &str, value: &T) -> StoreResult<()> {
    let text = serde_json::to_string(value).map_err(crate::store::StoreError::Serialize)?;
    write_slot_text(conn, key, &text)
}
