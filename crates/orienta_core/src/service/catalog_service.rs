//! Catalog lookup service.
//!
//! # Responsibility
//! - Provide read-only finders over the catalog lists of the document.
//!
//! # Invariants
//! - Lookup misses are `Ok(None)`, never errors; views render an empty
//!   state instead of failing.
//! - Vocational test fixtures are exposed read-only.

use crate::model::catalog::{
    CatalogEntry, CatalogKind, Career, EntityId, Project, Resource, University, VocationalTest,
};
use crate::repo::document_repo::DocumentRepository;
use crate::repo::RepoResult;

/// Use-case service for catalog reads.
pub struct CatalogService<D: DocumentRepository> {
    documents: D,
}

impl<D: DocumentRepository> CatalogService<D> {
    pub fn new(documents: D) -> Self {
        Self { documents }
    }

    /// Finds a career by stable id.
    pub fn career_by_id(&self, id: EntityId) -> RepoResult<Option<Career>> {
        let document = self.documents.get()?;
        Ok(document.careers.into_iter().find(|career| career.id == id))
    }

    /// Finds a university by stable id.
    pub fn university_by_id(&self, id: EntityId) -> RepoResult<Option<University>> {
        let document = self.documents.get()?;
        Ok(document
            .universities
            .into_iter()
            .find(|university| university.id == id))
    }

    /// Finds a resource by stable id.
    pub fn resource_by_id(&self, id: EntityId) -> RepoResult<Option<Resource>> {
        let document = self.documents.get()?;
        Ok(document
            .resources
            .into_iter()
            .find(|resource| resource.id == id))
    }

    /// Finds a project by stable id.
    pub fn project_by_id(&self, id: EntityId) -> RepoResult<Option<Project>> {
        let document = self.documents.get()?;
        Ok(document
            .projects
            .into_iter()
            .find(|project| project.id == id))
    }

    /// Finds an entity in the list selected by `kind`.
    pub fn find_by_id(&self, kind: CatalogKind, id: EntityId) -> RepoResult<Option<CatalogEntry>> {
        let entry = match kind {
            CatalogKind::Careers => self.career_by_id(id)?.map(CatalogEntry::Career),
            CatalogKind::Universities => self.university_by_id(id)?.map(CatalogEntry::University),
            CatalogKind::Resources => self.resource_by_id(id)?.map(CatalogEntry::Resource),
            CatalogKind::Projects => self.project_by_id(id)?.map(CatalogEntry::Project),
        };
        Ok(entry)
    }

    /// Lists every career in document order.
    pub fn careers(&self) -> RepoResult<Vec<Career>> {
        Ok(self.documents.get()?.careers)
    }

    /// Returns the read-only vocational test fixtures.
    pub fn vocational_tests(&self) -> RepoResult<Vec<VocationalTest>> {
        Ok(self.documents.get()?.vocational_tests)
    }

    /// Finds a vocational test fixture by stable id.
    pub fn vocational_test_by_id(&self, id: EntityId) -> RepoResult<Option<VocationalTest>> {
        let document = self.documents.get()?;
        Ok(document
            .vocational_tests
            .into_iter()
            .find(|test| test.id == id))
    }
}
