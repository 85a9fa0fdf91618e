//! Domain module
//!
//! Validated primitives, the lifecycle record, entities and tree rules.

pub mod value_objects;
pub mod lifecycle;
pub mod clock;
pub mod aggregates;
pub mod services;
pub mod events;

pub use value_objects::{
    BoundedName, DepartmentDepth, DepartmentId, DepartmentIdentifier, DepartmentPath,
    IanaTimeZone, LocationAddress, LocationId, PositionDescription, PositionId, ValidationError,
};
pub use lifecycle::EntityLifecycle;
pub use clock::{Clock, IdGenerator, SystemClock, FixedClock, RandomIdGenerator, SequentialIdGenerator};
pub use aggregates::{Department, Location, Position};
pub use services::{DepartmentHierarchy, DepartmentIndex, HierarchyError};
pub use events::{DirectoryEvent, DepartmentEvent, LocationEvent, PositionEvent};
