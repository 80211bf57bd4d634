//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts over the slot store.
//! - Isolate storage details from service/business orchestration.
//!
//! # Invariants
//! - Repository writes enforce `Document::validate()` before persistence.
//! - Repository APIs return semantic errors (`UserNotFound`,
//!   `RevisionConflict`) in addition to store transport errors.

use crate::migrate::UpgradeError;
use crate::model::catalog::EntityId;
use crate::model::document::DocumentValidationError;
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod document_repo;
pub mod session_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for document persistence and accessors.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Upgrade(UpgradeError),
    Validation(DocumentValidationError),
    /// A mutator targeted a user id that is not in the document.
    UserNotFound(EntityId),
    /// An unconditional `save` raced with another writer.
    RevisionConflict { expected: u64, found: u64 },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Upgrade(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::UserNotFound(id) => write!(f, "user not found: {id}"),
            Self::RevisionConflict { expected, found } => write!(
                f,
                "document revision conflict: caller loaded revision {expected}, store holds {found}"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Upgrade(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::UserNotFound(_) => None,
            Self::RevisionConflict { .. } => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Store(StoreError::Sqlite(value))
    }
}

impl From<UpgradeError> for RepoError {
    fn from(value: UpgradeError) -> Self {
        Self::Upgrade(value)
    }
}

impl From<DocumentValidationError> for RepoError {
    fn from(value: DocumentValidationError) -> Self {
        Self::Validation(value)
    }
}
