//! SQLite slot storage bootstrap and schema migration entry points.
//!
//! # Responsibility
//! - Open and configure the SQLite store backing the slot table.
//! - Apply slot-table schema migrations in deterministic order.
//! - Provide raw and JSON-typed access to named slots.
//!
//! # Invariants
//! - Slot-table schema version is tracked via `PRAGMA user_version`.
//! - Callers must not read/write slots before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
mod slots;

pub use open::{open_store, open_store_in_memory};
pub use slots::{
    read_slot_json, read_slot_text, remove_slot, write_slot_json, write_slot_text, SlotRead,
};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of the durable slot store.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    /// The on-disk slot schema was written by a newer build.
    UnsupportedSchemaVersion {
        store_version: u32,
        latest_supported: u32,
    },
    /// A slot value could not be serialized before writing.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                store_version,
                latest_supported,
            } => write!(
                f,
                "slot store schema version {store_version} is newer than supported {latest_supported}"
            ),
            Self::Serialize(err) => write!(f, "failed to serialize slot value: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
