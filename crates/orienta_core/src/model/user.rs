//! User domain model.
//!
//! # Responsibility
//! - Define the user record and the per-user collections mutated by
//!   profile accessors: favorites, custom lists, saved resources, test
//!   results, activity log and privacy settings.
//!
//! # Invariants
//! - `id` is stable and unique across the document's user list.
//! - `favorite_careers` and `saved_resources` behave as sets: no
//!   duplicate ids, toggle semantics flip membership.

use crate::model::catalog::EntityId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-curated list of careers (e.g. "Mis favoritas").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomList {
    /// Stable list id, generated at creation time.
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub career_ids: Vec<EntityId>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Per-area score of one completed vocational test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaScore {
    pub area: String,
    pub points: u32,
}

/// Outcome of one vocational test run, stored on the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: Uuid,
    /// References `VocationalTest::id`.
    pub test_id: EntityId,
    pub scores: Vec<AreaScore>,
    /// Suggested careers, best match first, referencing `Career::id`.
    pub top_careers: Vec<EntityId>,
    /// Unix epoch milliseconds.
    pub completed_at: i64,
}

/// Category of a user activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    SignIn,
    CareerViewed,
    TestCompleted,
    ListCreated,
    ReportGenerated,
}

/// One append-only activity log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: Uuid,
    pub kind: ActivityKind,
    pub detail: String,
    /// Unix epoch milliseconds.
    pub at: i64,
}

/// Per-user privacy toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub public_profile: bool,
    pub share_test_results: bool,
    pub allow_contact: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            public_profile: false,
            share_test_results: false,
            allow_contact: true,
        }
    }
}

/// Canonical user record inside the root document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub password: String,
    /// Free-form profile blurb shown on the user page.
    pub profile: String,
    pub favorite_careers: Vec<EntityId>,
    pub test_results: Vec<TestResult>,
    pub custom_lists: Vec<CustomList>,
    pub saved_resources: Vec<EntityId>,
    pub activity_log: Vec<ActivityEntry>,
    pub privacy_settings: PrivacySettings,
}

impl User {
    /// Creates a user with empty collections and default privacy settings.
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password: password.into(),
            profile: String::new(),
            favorite_careers: Vec::new(),
            test_results: Vec::new(),
            custom_lists: Vec::new(),
            saved_resources: Vec::new(),
            activity_log: Vec::new(),
            privacy_settings: PrivacySettings::default(),
        }
    }

    /// Flips membership of `career_id` in the favorite set.
    ///
    /// Returns `true` when the career is a favorite after the call.
    pub fn toggle_favorite(&mut self, career_id: EntityId) -> bool {
        toggle_membership(&mut self.favorite_careers, career_id)
    }

    /// Flips membership of `resource_id` in the saved-resource set.
    ///
    /// Returns `true` when the resource is saved after the call.
    pub fn toggle_saved_resource(&mut self, resource_id: EntityId) -> bool {
        toggle_membership(&mut self.saved_resources, resource_id)
    }
}

fn toggle_membership(set: &mut Vec<EntityId>, id: EntityId) -> bool {
    match set.iter().position(|existing| *existing == id) {
        Some(index) => {
            set.remove(index);
            false
        }
        None => {
            set.push(id);
            true
        }
    }
}
