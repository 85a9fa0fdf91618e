//! Inbound ports (Use case traits)
//!
//! Hexagonal architecture: application service interfaces.

use async_trait::async_trait;

use crate::application::dto::*;
use crate::domain::aggregates::{Department, Location, Position};
use crate::domain::services::HierarchyError;
use crate::domain::value_objects::{DepartmentId, LocationId, PositionId, ValidationError};
use crate::ports::outbound::RepositoryError;

/// Department tree use cases
#[async_trait]
pub trait DepartmentUseCases: Send + Sync {
    /// Create a root or child department
    async fn create_department(&self, command: CreateDepartmentCommand) -> Result<Department, UseCaseError>;

    /// Give a department a new display name
    async fn rename_department(&self, command: RenameDepartmentCommand) -> Result<Department, UseCaseError>;

    /// Re-parent a department together with its subtree
    async fn move_department(&self, command: MoveDepartmentCommand) -> Result<Department, UseCaseError>;

    /// Mark a department inactive
    async fn deactivate_department(&self, id: DepartmentId) -> Result<Department, UseCaseError>;

    /// Get department by ID
    async fn get_department(&self, id: DepartmentId) -> Result<Option<Department>, UseCaseError>;

    /// Direct children, ordered by path
    async fn list_children(&self, id: DepartmentId) -> Result<Vec<Department>, UseCaseError>;

    /// Ancestors, nearest first
    async fn list_ancestors(&self, id: DepartmentId) -> Result<Vec<Department>, UseCaseError>;
}

/// Location use cases
#[async_trait]
pub trait LocationUseCases: Send + Sync {
    async fn create_location(&self, command: CreateLocationCommand) -> Result<Location, UseCaseError>;
    async fn get_location(&self, id: LocationId) -> Result<Option<Location>, UseCaseError>;
    async fn list_locations(&self) -> Result<Vec<Location>, UseCaseError>;
}

/// Position use cases
#[async_trait]
pub trait PositionUseCases: Send + Sync {
    async fn create_position(&self, command: CreatePositionCommand) -> Result<Position, UseCaseError>;
    async fn get_position(&self, id: PositionId) -> Result<Option<Position>, UseCaseError>;
    async fn list_positions(&self) -> Result<Vec<Position>, UseCaseError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UseCaseError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("hierarchy error: {0}")]
    Hierarchy(HierarchyError),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<HierarchyError> for UseCaseError {
    fn from(err: HierarchyError) -> Self {
        match err {
            HierarchyError::Validation(e) => Self::Validation(e),
            other => Self::Hierarchy(other),
        }
    }
}
