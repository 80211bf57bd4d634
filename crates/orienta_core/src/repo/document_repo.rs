//! Root document repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Own the `db` slot holding the serialized root document.
//! - Seed, load, upgrade and persist the document as one atomic unit.
//!
//! # Invariants
//! - The document is the unit of atomicity: reads and writes always cover
//!   the whole value, never individual entities.
//! - `mutate` runs its read-modify-write cycle inside one transaction, so
//!   interleaved mutators cannot drop each other's updates.
//! - `save` performs an optimistic revision check; a stale caller gets
//!   `RepoError::RevisionConflict` instead of silently winning.

use crate::migrate::{self, UpgradeError};
use crate::model::document::{seed_document, Document};
use crate::repo::{RepoError, RepoResult};
use crate::store::{read_slot_json, write_slot_json, SlotRead};
use log::{info, warn};
use rusqlite::Connection;
use serde_json::Value;

/// Slot key holding the serialized root document.
pub const DOCUMENT_SLOT: &str = "db";

/// Repository interface for whole-document persistence.
///
/// Kept as a trait so services can run against an in-memory fake; the
/// production implementation is [`SqliteDocumentRepository`].
pub trait DocumentRepository {
    /// Ensures a current-version document exists and returns it.
    ///
    /// # Contract
    /// - Absent or corrupt slot: the seed document is written and returned.
    /// - Older stored version: the upgrade chain runs and the migrated
    ///   document is persisted; user data is preserved.
    /// - Newer stored version: `RepoError::Upgrade(TooNew)`.
    fn init(&self) -> RepoResult<Document>;

    /// Returns the current document, falling back to `init` semantics
    /// when nothing usable is stored.
    fn get(&self) -> RepoResult<Document>;

    /// Persists `doc` as the new current document.
    ///
    /// # Contract
    /// - Fails with `RevisionConflict` when the stored revision differs
    ///   from the revision the caller loaded.
    /// - On success returns the persisted document with its revision
    ///   bumped.
    fn save(&self, doc: &Document) -> RepoResult<Document>;

    /// Loads the document, applies `apply` in memory and persists the
    /// result, all inside one transaction.
    fn mutate(&self, apply: impl FnOnce(&mut Document) -> RepoResult<()>) -> RepoResult<Document>;
}

/// SQLite-backed document repository over a single connection.
pub struct SqliteDocumentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDocumentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DocumentRepository for SqliteDocumentRepository<'_> {
    fn init(&self) -> RepoResult<Document> {
        // Single connection per process; unchecked_transaction keeps the
        // borrow shared while still giving whole-cycle atomicity.
        let tx = self.conn.unchecked_transaction()?;
        let loaded = load_or_seed(&tx)?;
        if loaded.dirty {
            write_slot_json(&tx, DOCUMENT_SLOT, &loaded.document)?;
        }
        tx.commit()?;
        Ok(loaded.document)
    }

    fn get(&self) -> RepoResult<Document> {
        self.init()
    }

    fn save(&self, doc: &Document) -> RepoResult<Document> {
        doc.validate()?;

        let tx = self.conn.unchecked_transaction()?;
        if let SlotRead::Value(stored) = read_slot_json::<Value>(&tx, DOCUMENT_SLOT)? {
            let found = stored.get("revision").and_then(Value::as_u64).unwrap_or(0);
            if found != doc.revision {
                warn!(
                    "event=document_save module=repo status=conflict expected={} found={found}",
                    doc.revision
                );
                return Err(RepoError::RevisionConflict {
                    expected: doc.revision,
                    found,
                });
            }
        }

        let mut persisted = doc.clone();
        persisted.revision += 1;
        write_slot_json(&tx, DOCUMENT_SLOT, &persisted)?;
        tx.commit()?;
        Ok(persisted)
    }

    fn mutate(&self, apply: impl FnOnce(&mut Document) -> RepoResult<()>) -> RepoResult<Document> {
        let tx = self.conn.unchecked_transaction()?;
        let mut document = load_or_seed(&tx)?.document;

        apply(&mut document)?;
        document.validate()?;
        document.revision += 1;

        write_slot_json(&tx, DOCUMENT_SLOT, &document)?;
        tx.commit()?;
        Ok(document)
    }
}

struct Loaded {
    document: Document,
    /// Whether the loaded document differs from the stored bytes and
    /// must be written back (seeded or migrated).
    dirty: bool,
}

fn load_or_seed(conn: &Connection) -> RepoResult<Loaded> {
    let raw = match read_slot_json::<Value>(conn, DOCUMENT_SLOT)? {
        SlotRead::Value(value) => value,
        SlotRead::Absent => {
            info!("event=document_init module=repo status=seeded reason=absent");
            return Ok(Loaded {
                document: seed_document(),
                dirty: true,
            });
        }
        SlotRead::Corrupt => return Ok(reseed("unreadable_slot")),
    };

    let found_version = match migrate::stored_version(&raw) {
        Ok(version) => version,
        Err(UpgradeError::Malformed(details)) => {
            warn!("event=document_init module=repo status=malformed details={details}");
            return Ok(reseed("missing_schema_version"));
        }
        Err(err @ UpgradeError::TooNew { .. }) => return Err(err.into()),
    };

    match migrate::upgrade_to_current(raw) {
        Ok(mut document) => {
            let migrated = found_version != document.schema_version;
            if migrated {
                document.revision += 1;
                info!(
                    "event=document_init module=repo status=migrated from={found_version} to={}",
                    document.schema_version
                );
            }
            Ok(Loaded {
                document,
                dirty: migrated,
            })
        }
        Err(err @ UpgradeError::TooNew { .. }) => Err(err.into()),
        Err(UpgradeError::Malformed(details)) => {
            warn!("event=document_init module=repo status=malformed details={details}");
            Ok(reseed("malformed_document"))
        }
    }
}

fn reseed(reason: &str) -> Loaded {
    warn!("event=document_init module=repo status=seeded reason={reason}");
    Loaded {
        document: seed_document(),
        dirty: true,
    }
}
