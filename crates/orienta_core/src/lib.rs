//! Core data layer for the Orienta vocational-guidance app.
//! This crate is the single source of truth for the persisted document
//! and its access rules.

pub mod logging;
pub mod migrate;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status};
pub use migrate::{upgrade_to_current, UpgradeError};
pub use model::catalog::{
    Career, CatalogEntry, CatalogKind, EntityId, Project, Resource, ResourceKind, University,
    VocationalTest,
};
pub use model::document::{seed_document, Document, DocumentValidationError, SCHEMA_VERSION};
pub use model::user::{
    ActivityEntry, ActivityKind, AreaScore, CustomList, PrivacySettings, TestResult, User,
};
pub use repo::document_repo::{DocumentRepository, SqliteDocumentRepository, DOCUMENT_SLOT};
pub use repo::session_repo::{SessionRepository, SqliteSessionRepository, ACTIVE_USER_SLOT};
pub use repo::{RepoError, RepoResult};
pub use service::catalog_service::CatalogService;
pub use service::profile_service::ProfileService;
pub use store::{
    open_store, open_store_in_memory, read_slot_json, read_slot_text, remove_slot, write_slot_json,
    write_slot_text, SlotRead, StoreError, StoreResult,
};
pub use validate::{validate_email, validate_password, Validation};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
