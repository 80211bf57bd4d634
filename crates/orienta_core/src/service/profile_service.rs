//! Profile and session use-case service.
//!
//! # Responsibility
//! - Provide the user-facing mutators: favorite and saved-resource
//!   toggles, custom lists, activity log and test results.
//! - Keep the session snapshot and the authoritative document record in
//!   step where the contract requires it.
//!
//! # Invariants
//! - Every mutator goes through `DocumentRepository::mutate`, so its
//!   read-modify-write cycle is atomic.
//! - The session snapshot is a copy; only `update_active_user` and
//!   `sign_in` write both the document and the snapshot.

use crate::model::catalog::EntityId;
use crate::model::now_epoch_ms;
use crate::model::user::{
    ActivityEntry, ActivityKind, AreaScore, CustomList, TestResult, User,
};
use crate::repo::document_repo::DocumentRepository;
use crate::repo::session_repo::SessionRepository;
use crate::repo::{RepoError, RepoResult};
use uuid::Uuid;

/// Use-case service for profile mutations and session handling.
pub struct ProfileService<D: DocumentRepository, S: SessionRepository> {
    documents: D,
    sessions: S,
}

impl<D: DocumentRepository, S: SessionRepository> ProfileService<D, S> {
    pub fn new(documents: D, sessions: S) -> Self {
        Self { documents, sessions }
    }

    /// Finds a user by stable id.
    pub fn find_user(&self, user_id: EntityId) -> RepoResult<Option<User>> {
        let document = self.documents.get()?;
        Ok(document.user(user_id).cloned())
    }

    /// Finds a user by email, case-insensitive.
    pub fn find_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let document = self.documents.get()?;
        Ok(document.user_by_email(email).cloned())
    }

    /// Flips membership of `career_id` in the user's favorite set.
    ///
    /// Returns `true` when the career is a favorite after the call.
    pub fn toggle_favorite_career(
        &self,
        user_id: EntityId,
        career_id: EntityId,
    ) -> RepoResult<bool> {
        let mut now_favorite = false;
        self.documents.mutate(|document| {
            let user = document
                .user_mut(user_id)
                .ok_or(RepoError::UserNotFound(user_id))?;
            now_favorite = user.toggle_favorite(career_id);
            Ok(())
        })?;
        Ok(now_favorite)
    }

    /// Flips membership of `resource_id` in the user's saved set.
    ///
    /// Returns `true` when the resource is saved after the call.
    pub fn toggle_saved_resource(
        &self,
        user_id: EntityId,
        resource_id: EntityId,
    ) -> RepoResult<bool> {
        let mut now_saved = false;
        self.documents.mutate(|document| {
            let user = document
                .user_mut(user_id)
                .ok_or(RepoError::UserNotFound(user_id))?;
            now_saved = user.toggle_saved_resource(resource_id);
            Ok(())
        })?;
        Ok(now_saved)
    }

    /// Creates a custom career list and returns its generated id.
    pub fn create_custom_list(
        &self,
        user_id: EntityId,
        name: impl Into<String>,
        description: impl Into<String>,
        career_ids: Vec<EntityId>,
    ) -> RepoResult<Uuid> {
        let list = CustomList {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            career_ids,
            created_at: now_epoch_ms(),
        };
        let list_id = list.id;

        self.documents.mutate(|document| {
            let user = document
                .user_mut(user_id)
                .ok_or(RepoError::UserNotFound(user_id))?;
            user.custom_lists.push(list);
            Ok(())
        })?;
        Ok(list_id)
    }

    /// Deletes a custom list by id.
    ///
    /// Returns `true` when the list existed and was removed; deleting an
    /// unknown list is not an error.
    pub fn delete_custom_list(&self, user_id: EntityId, list_id: Uuid) -> RepoResult<bool> {
        let mut removed = false;
        self.documents.mutate(|document| {
            let user = document
                .user_mut(user_id)
                .ok_or(RepoError::UserNotFound(user_id))?;
            if let Some(index) = user.custom_lists.iter().position(|list| list.id == list_id) {
                user.custom_lists.remove(index);
                removed = true;
            }
            Ok(())
        })?;
        Ok(removed)
    }

    /// Returns the user's custom lists in creation order.
    ///
    /// An unknown user reads as "no lists"; views render the empty state.
    pub fn custom_lists(&self, user_id: EntityId) -> RepoResult<Vec<CustomList>> {
        let document = self.documents.get()?;
        Ok(document
            .user(user_id)
            .map(|user| user.custom_lists.clone())
            .unwrap_or_default())
    }

    /// Appends an activity log entry and returns its generated id.
    pub fn record_activity(
        &self,
        user_id: EntityId,
        kind: ActivityKind,
        detail: impl Into<String>,
    ) -> RepoResult<Uuid> {
        let entry = ActivityEntry {
            id: Uuid::new_v4(),
            kind,
            detail: detail.into(),
            at: now_epoch_ms(),
        };
        let entry_id = entry.id;

        self.documents.mutate(|document| {
            let user = document
                .user_mut(user_id)
                .ok_or(RepoError::UserNotFound(user_id))?;
            user.activity_log.push(entry);
            Ok(())
        })?;
        Ok(entry_id)
    }

    /// Stores the outcome of a vocational test run on the user.
    pub fn record_test_result(
        &self,
        user_id: EntityId,
        test_id: EntityId,
        scores: Vec<AreaScore>,
        top_careers: Vec<EntityId>,
    ) -> RepoResult<Uuid> {
        let result = TestResult {
            id: Uuid::new_v4(),
            test_id,
            scores,
            top_careers,
            completed_at: now_epoch_ms(),
        };
        let result_id = result.id;

        self.documents.mutate(|document| {
            let user = document
                .user_mut(user_id)
                .ok_or(RepoError::UserNotFound(user_id))?;
            user.test_results.push(result);
            Ok(())
        })?;
        Ok(result_id)
    }

    /// Returns the session snapshot, or `None` when signed out.
    pub fn active_user(&self) -> RepoResult<Option<User>> {
        self.sessions.active_user()
    }

    /// Replaces the session snapshot with a copy of `user`.
    ///
    /// Does not touch the document; the snapshot may drift until
    /// `update_active_user` re-syncs both.
    pub fn set_active_user(&self, user: &User) -> RepoResult<()> {
        self.sessions.set_active_user(user)
    }

    /// Clears the session snapshot. Returns `true` when someone was
    /// signed in.
    pub fn sign_out(&self) -> RepoResult<bool> {
        self.sessions.clear_active_user()
    }

    /// Writes `user` to the document and refreshes the session snapshot
    /// from the persisted copy.
    pub fn update_active_user(&self, user: &User) -> RepoResult<()> {
        let replacement = user.clone();
        self.documents.mutate(|document| {
            let stored = document
                .user_mut(user.id)
                .ok_or(RepoError::UserNotFound(user.id))?;
            *stored = replacement;
            Ok(())
        })?;
        self.sessions.set_active_user(user)
    }

    /// Signs in by email and password.
    ///
    /// On success the session snapshot is set, a `SignIn` activity entry
    /// is appended and the user is returned. Unknown email or wrong
    /// password both read as `Ok(None)`.
    pub fn sign_in(&self, email: &str, password: &str) -> RepoResult<Option<User>> {
        let Some(user) = self.find_user_by_email(email)? else {
            return Ok(None);
        };
        if user.password != password {
            return Ok(None);
        }

        self.record_activity(user.id, ActivityKind::SignIn, "")?;
        // Snapshot the post-activity record so the session copy starts
        // in sync with the document.
        let Some(fresh) = self.find_user(user.id)? else {
            return Ok(None);
        };
        self.sessions.set_active_user(&fresh)?;
        Ok(Some(fresh))
    }
}
