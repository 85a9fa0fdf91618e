//! Outbound ports (Repository traits)
//!
//! Hexagonal architecture: these are the interfaces that infrastructure must implement.

use async_trait::async_trait;

use crate::domain::aggregates::{Department, Location, Position};
use crate::domain::events::DirectoryEvent;
use crate::domain::value_objects::{DepartmentId, DepartmentIdentifier, LocationId, PositionId};

/// Repository result type
pub type RepoResult<T> = Result<T, RepositoryError>;

/// Repository errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Department repository port
///
/// Implementations own whole-tree uniqueness of business identifiers
/// (case-insensitive) and must apply `save_all` as one unit.
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// Find department by ID
    async fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>>;

    /// Find department by business identifier, ignoring case
    async fn find_by_identifier(
        &self,
        identifier: &DepartmentIdentifier,
    ) -> RepoResult<Option<Department>>;

    /// Direct children of a department
    async fn find_children(&self, parent_id: DepartmentId) -> RepoResult<Vec<Department>>;

    /// Departments without a parent
    async fn find_roots(&self) -> RepoResult<Vec<Department>>;

    /// Every stored department
    async fn find_all(&self) -> RepoResult<Vec<Department>>;

    /// Insert or replace a department
    async fn save(&self, department: &Department) -> RepoResult<()>;

    /// Insert or replace several departments at once
    async fn save_all(&self, departments: &[Department]) -> RepoResult<()>;
}

/// Location repository port
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn find_by_id(&self, id: LocationId) -> RepoResult<Option<Location>>;
    async fn list(&self) -> RepoResult<Vec<Location>>;
    async fn save(&self, location: &Location) -> RepoResult<()>;
}

/// Position repository port
#[async_trait]
pub trait PositionRepository: Send + Sync {
    async fn find_by_id(&self, id: PositionId) -> RepoResult<Option<Position>>;
    async fn list(&self) -> RepoResult<Vec<Position>>;
    async fn save(&self, position: &Position) -> RepoResult<()>;
}

/// Event publisher port
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish domain events
    async fn publish(&self, events: Vec<DirectoryEvent>) -> RepoResult<()>;
}
