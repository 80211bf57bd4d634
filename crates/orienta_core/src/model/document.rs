//! Root document model and seed fixtures.
//!
//! # Responsibility
//! - Define the single persisted root document and its schema constant.
//! - Provide the seed document used when no stored copy exists.
//! - Validate structural invariants at the store boundary.
//!
//! # Invariants
//! - `id` values are unique within each entity list.
//! - `schema_version` always equals `SCHEMA_VERSION` for in-memory
//!   documents; older stored versions are upgraded before parsing.
//! - `revision` is bumped by the repository on every persisted write and
//!   is excluded from content-level comparisons by callers.

use crate::model::catalog::{
    Career, EntityId, Project, Resource, ResourceKind, TestOption, TestQuestion, University,
    VocationalTest,
};
use crate::model::user::User;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Current document schema version.
///
/// History:
/// - v1: initial shape, users without `saved_resources`.
/// - v2: adds `saved_resources` to every user.
/// - v3: adds `privacy_settings` and `activity_log` to every user.
pub const SCHEMA_VERSION: u32 = 3;

/// Structural validation failure for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentValidationError {
    /// Two entities in the named list share an id.
    DuplicateId { list: &'static str, id: EntityId },
    /// Two users share an email, which would make sign-in ambiguous.
    DuplicateEmail(String),
}

impl Display for DocumentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId { list, id } => {
                write!(f, "duplicate id {id} in document list `{list}`")
            }
            Self::DuplicateEmail(email) => write!(f, "duplicate user email `{email}`"),
        }
    }
}

impl Error for DocumentValidationError {}

/// The single root record persisted as the application's entire dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub schema_version: u32,
    /// Optimistic concurrency counter, bumped on every persisted write.
    pub revision: u64,
    pub users: Vec<User>,
    pub careers: Vec<Career>,
    pub universities: Vec<University>,
    pub resources: Vec<Resource>,
    pub projects: Vec<Project>,
    /// Read-only question/card fixtures.
    pub vocational_tests: Vec<VocationalTest>,
}

impl Document {
    /// Finds a user by stable id.
    pub fn user(&self, id: EntityId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Finds a user by stable id for in-place mutation.
    pub fn user_mut(&mut self, id: EntityId) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id == id)
    }

    /// Finds a user by email, case-insensitive on the local/domain text.
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        let needle = email.trim().to_ascii_lowercase();
        self.users
            .iter()
            .find(|user| user.email.to_ascii_lowercase() == needle)
    }

    /// Checks id-uniqueness invariants across every entity list.
    ///
    /// # Contract
    /// - Write paths must call this before persisting a document.
    pub fn validate(&self) -> Result<(), DocumentValidationError> {
        check_unique_ids("users", self.users.iter().map(|user| user.id))?;
        check_unique_ids("careers", self.careers.iter().map(|career| career.id))?;
        check_unique_ids(
            "universities",
            self.universities.iter().map(|university| university.id),
        )?;
        check_unique_ids("resources", self.resources.iter().map(|resource| resource.id))?;
        check_unique_ids("projects", self.projects.iter().map(|project| project.id))?;
        check_unique_ids(
            "vocational_tests",
            self.vocational_tests.iter().map(|test| test.id),
        )?;

        let mut emails = HashSet::new();
        for user in &self.users {
            if !emails.insert(user.email.to_ascii_lowercase()) {
                return Err(DocumentValidationError::DuplicateEmail(user.email.clone()));
            }
        }

        Ok(())
    }
}

fn check_unique_ids(
    list: &'static str,
    ids: impl Iterator<Item = EntityId>,
) -> Result<(), DocumentValidationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DocumentValidationError::DuplicateId { list, id });
        }
    }
    Ok(())
}

/// Builds the default document written on first access.
///
/// Contains one seed user and the fixture catalog lists. The seed content
/// mirrors the reference dataset the guidance pages are built around.
pub fn seed_document() -> Document {
    Document {
        schema_version: SCHEMA_VERSION,
        revision: 0,
        users: vec![User::new(
            1,
            "Estudiante Demo",
            "demo@orienta.app",
            "Demo1234",
        )],
        careers: seed_careers(),
        universities: seed_universities(),
        resources: seed_resources(),
        projects: seed_projects(),
        vocational_tests: seed_vocational_tests(),
    }
}

fn seed_careers() -> Vec<Career> {
    vec![
        Career {
            id: 1,
            name: "Ingeniería de Software".to_string(),
            area: "tecnologia".to_string(),
            description: "Diseño y construcción de sistemas de software.".to_string(),
            duration_semesters: 10,
            cost_per_semester: 3_500,
        },
        Career {
            id: 2,
            name: "Medicina".to_string(),
            area: "salud".to_string(),
            description: "Formación médica general y clínica.".to_string(),
            duration_semesters: 14,
            cost_per_semester: 5_200,
        },
        Career {
            id: 3,
            name: "Diseño Gráfico".to_string(),
            area: "artes".to_string(),
            description: "Comunicación visual, branding y medios digitales.".to_string(),
            duration_semesters: 8,
            cost_per_semester: 2_800,
        },
        Career {
            id: 4,
            name: "Psicología".to_string(),
            area: "ciencias_sociales".to_string(),
            description: "Estudio del comportamiento y procesos mentales.".to_string(),
            duration_semesters: 10,
            cost_per_semester: 3_000,
        },
    ]
}

fn seed_universities() -> Vec<University> {
    vec![
        University {
            id: 1,
            name: "Universidad Nacional".to_string(),
            city: "Bogotá".to_string(),
            is_public: true,
            career_ids: vec![1, 2, 4],
        },
        University {
            id: 2,
            name: "Universidad del Valle".to_string(),
            city: "Cali".to_string(),
            is_public: true,
            career_ids: vec![2, 3],
        },
        University {
            id: 3,
            name: "Universidad de los Andes".to_string(),
            city: "Bogotá".to_string(),
            is_public: false,
            career_ids: vec![1, 3, 4],
        },
    ]
}

fn seed_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: 1,
            title: "Guía para elegir carrera".to_string(),
            url: "https://orienta.app/recursos/guia-elegir-carrera".to_string(),
            kind: ResourceKind::Guide,
        },
        Resource {
            id: 2,
            title: "Un día en la vida de un desarrollador".to_string(),
            url: "https://orienta.app/recursos/dia-desarrollador".to_string(),
            kind: ResourceKind::Video,
        },
        Resource {
            id: 3,
            title: "Introducción a la anatomía".to_string(),
            url: "https://orienta.app/recursos/intro-anatomia".to_string(),
            kind: ResourceKind::Course,
        },
    ]
}

fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "App de telemedicina rural".to_string(),
            description: "Plataforma de consultas remotas para zonas apartadas.".to_string(),
            related_careers: vec![1, 2],
        },
        Project {
            id: 2,
            name: "Rediseño de marca social".to_string(),
            description: "Identidad visual para una fundación educativa.".to_string(),
            related_careers: vec![3],
        },
    ]
}

fn seed_vocational_tests() -> Vec<VocationalTest> {
    vec![VocationalTest {
        id: 1,
        name: "Test de intereses".to_string(),
        questions: vec![
            TestQuestion {
                id: 1,
                prompt: "¿Qué actividad disfrutas más?".to_string(),
                options: vec![
                    TestOption {
                        label: "Resolver acertijos lógicos".to_string(),
                        area: "tecnologia".to_string(),
                    },
                    TestOption {
                        label: "Cuidar de otras personas".to_string(),
                        area: "salud".to_string(),
                    },
                    TestOption {
                        label: "Dibujar o diseñar".to_string(),
                        area: "artes".to_string(),
                    },
                ],
            },
            TestQuestion {
                id: 2,
                prompt: "¿Qué materia prefieres?".to_string(),
                options: vec![
                    TestOption {
                        label: "Matemáticas".to_string(),
                        area: "tecnologia".to_string(),
                    },
                    TestOption {
                        label: "Biología".to_string(),
                        area: "salud".to_string(),
                    },
                    TestOption {
                        label: "Ciencias sociales".to_string(),
                        area: "ciencias_sociales".to_string(),
                    },
                ],
            },
        ],
    }]
}
