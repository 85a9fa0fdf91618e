//! OpenSASE Organization Directory
//!
//! Organization reference data: a tree of departments, office locations
//! and job positions, built with Domain-Driven Design.
//!
//! ## Architecture
//!
//! - **Domain Layer**: Validated value objects, entities, tree rules, events
//! - **Application Layer**: Use case orchestration, DTOs
//! - **Ports Layer**: Hexagonal architecture interfaces
//! - **Infrastructure Layer**: In-memory adapters
//!
//! ## Key Entities
//!
//! - **Department**: Node in the organizational tree with a materialized path
//! - **Location**: Office with a normalized address and IANA time zone
//! - **Position**: Job title with a bounded description

pub mod config;
pub mod domain;
pub mod application;
pub mod ports;
pub mod infrastructure;

// Re-exports for convenience
pub use config::{ConfigError, DirectoryConfig};
pub use domain::aggregates::{Department, Location, Position};
pub use domain::value_objects::{
    BoundedName, DepartmentDepth, DepartmentId, DepartmentIdentifier, DepartmentPath,
    IanaTimeZone, LocationAddress, LocationId, PositionDescription, PositionId, ValidationError,
};
pub use domain::lifecycle::EntityLifecycle;
pub use domain::clock::{Clock, IdGenerator, SystemClock, RandomIdGenerator};
pub use domain::services::{DepartmentHierarchy, DepartmentIndex, HierarchyError};
pub use domain::events::{DirectoryEvent, DepartmentEvent, LocationEvent, PositionEvent};
pub use application::{DepartmentService, LocationService, PositionService};
pub use ports::inbound::{DepartmentUseCases, LocationUseCases, PositionUseCases, UseCaseError};
pub use ports::outbound::{
    DepartmentRepository, EventPublisher, LocationRepository, PositionRepository, RepositoryError,
};
