//! Catalog reference entities.
//!
//! # Responsibility
//! - Define the read-mostly reference records shipped with the seed
//!   document: careers, universities, resources, projects and the
//!   vocational test fixtures.
//!
//! # Invariants
//! - Every catalog entity carries a stable integer `id`, unique within
//!   its own list.
//! - Vocational test fixtures are read-only; no mutator touches them.

use serde::{Deserialize, Serialize};

/// Stable identifier shared by all catalog entities and users.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = u64;

/// A career a student can explore, compare and favorite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Career {
    pub id: EntityId,
    pub name: String,
    /// Broad knowledge area used by test scoring (e.g. `ciencias_sociales`).
    pub area: String,
    pub description: String,
    pub duration_semesters: u32,
    /// Reference tuition per semester, in whole currency units.
    pub cost_per_semester: u64,
}

/// An institution offering one or more careers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct University {
    pub id: EntityId,
    pub name: String,
    pub city: String,
    pub is_public: bool,
    /// Careers offered, referencing `Career::id`.
    pub career_ids: Vec<EntityId>,
}

/// Kind tag for study resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Article,
    Video,
    Course,
    Guide,
}

/// External study material a user can save for later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: EntityId,
    pub title: String,
    pub url: String,
    pub kind: ResourceKind,
}

/// A showcase project illustrating what a career leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    /// Careers this project is relevant for, referencing `Career::id`.
    pub related_careers: Vec<EntityId>,
}

/// One answer option of a vocational test question.
///
/// Choosing an option awards one point to its `area`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestOption {
    pub label: String,
    pub area: String,
}

/// One question of a vocational test fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestQuestion {
    pub id: EntityId,
    pub prompt: String,
    pub options: Vec<TestOption>,
}

/// A complete vocational test card set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocationalTest {
    pub id: EntityId,
    pub name: String,
    pub questions: Vec<TestQuestion>,
}

/// Discriminator for catalog lookups that take the list as a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Careers,
    Universities,
    Resources,
    Projects,
}

/// Owned result of a kind-parameterized catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEntry {
    Career(Career),
    University(University),
    Resource(Resource),
    Project(Project),
}

impl CatalogEntry {
    /// Returns the stable id of the wrapped entity.
    pub fn id(&self) -> EntityId {
        match self {
            Self::Career(career) => career.id,
            Self::University(university) => university.id,
            Self::Resource(resource) => resource.id,
            Self::Project(project) => project.id,
        }
    }
}
