//! Active-user session slot repository.
//!
//! # Responsibility
//! - Hold the session snapshot of the signed-in user in its own slot,
//!   independent of the authoritative record in the root document.
//!
//! # Invariants
//! - The stored value is a copy; it may drift from the document until a
//!   caller re-syncs it (see `ProfileService::update_active_user`).
//! - A corrupt snapshot reads as "signed out", never as an error.

use crate::model::user::User;
use crate::repo::RepoResult;
use crate::store::{read_slot_json, remove_slot, write_slot_json};
use log::info;
use rusqlite::Connection;

/// Slot key holding the active-user snapshot.
pub const ACTIVE_USER_SLOT: &str = "active_user";

/// Repository interface for the session snapshot.
pub trait SessionRepository {
    /// Returns the active-user snapshot, or `None` when signed out.
    fn active_user(&self) -> RepoResult<Option<User>>;

    /// Replaces the active-user snapshot with a copy of `user`.
    fn set_active_user(&self, user: &User) -> RepoResult<()>;

    /// Clears the snapshot. Returns `true` when a user was signed in.
    fn clear_active_user(&self) -> RepoResult<bool>;
}

/// SQLite-backed session repository over a single connection.
pub struct SqliteSessionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSessionRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SessionRepository for SqliteSessionRepository<'_> {
    fn active_user(&self) -> RepoResult<Option<User>> {
        let snapshot = read_slot_json::<User>(self.conn, ACTIVE_USER_SLOT)?;
        Ok(snapshot.into_option())
    }

    fn set_active_user(&self, user: &User) -> RepoResult<()> {
        write_slot_json(self.conn, ACTIVE_USER_SLOT, user)?;
        info!(
            "event=session_set module=repo status=ok user_id={}",
            user.id
        );
        Ok(())
    }

    fn clear_active_user(&self) -> RepoResult<bool> {
        let removed = remove_slot(self.conn, ACTIVE_USER_SLOT)?;
        info!("event=session_clear module=repo status=ok removed={removed}");
        Ok(removed)
    }
}
