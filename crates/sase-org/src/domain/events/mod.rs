//! Domain Events
//!
//! Raised by the application services when the directory changes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DepartmentId, DepartmentPath, LocationId, PositionId};

/// All domain events in the directory bounded context
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectoryEvent {
    Department(DepartmentEvent),
    Location(LocationEvent),
    Position(PositionEvent),
}

/// Department-related domain events
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepartmentEvent {
    Created {
        department_id: DepartmentId,
        parent_id: Option<DepartmentId>,
        path: DepartmentPath,
        created_at: DateTime<Utc>,
    },

    Renamed {
        department_id: DepartmentId,
        old_name: String,
        new_name: String,
        renamed_at: DateTime<Utc>,
    },

    Moved {
        department_id: DepartmentId,
        from_parent: Option<DepartmentId>,
        to_parent: Option<DepartmentId>,
        old_path: DepartmentPath,
        new_path: DepartmentPath,
        /// Number of descendants whose path changed along with the node
        descendants_moved: usize,
        moved_at: DateTime<Utc>,
    },

    Deactivated {
        department_id: DepartmentId,
        deactivated_at: DateTime<Utc>,
    },
}

/// Location-related domain events
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationEvent {
    Created {
        location_id: LocationId,
        created_at: DateTime<Utc>,
    },
}

/// Position-related domain events
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionEvent {
    Created {
        position_id: PositionId,
        created_at: DateTime<Utc>,
    },
}

impl DirectoryEvent {
    /// Event type name, e.g. `department.moved`
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Department(DepartmentEvent::Created { .. }) => "department.created",
            Self::Department(DepartmentEvent::Renamed { .. }) => "department.renamed",
            Self::Department(DepartmentEvent::Moved { .. }) => "department.moved",
            Self::Department(DepartmentEvent::Deactivated { .. }) => "department.deactivated",
            Self::Location(LocationEvent::Created { .. }) => "location.created",
            Self::Position(PositionEvent::Created { .. }) => "position.created",
        }
    }

    /// When the change happened
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::Department(DepartmentEvent::Created { created_at, .. }) => *created_at,
            Self::Department(DepartmentEvent::Renamed { renamed_at, .. }) => *renamed_at,
            Self::Department(DepartmentEvent::Moved { moved_at, .. }) => *moved_at,
            Self::Department(DepartmentEvent::Deactivated { deactivated_at, .. }) => *deactivated_at,
            Self::Location(LocationEvent::Created { created_at, .. }) => *created_at,
            Self::Position(PositionEvent::Created { created_at, .. }) => *created_at,
        }
    }
}
