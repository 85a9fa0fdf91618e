//! Position Entity
//!
//! Job position: name and description.

use serde::{Deserialize, Serialize};

use crate::domain::lifecycle::EntityLifecycle;
use crate::domain::value_objects::{BoundedName, PositionDescription, PositionId};

/// Position entity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    id: PositionId,
    name: BoundedName,
    description: PositionDescription,
    lifecycle: EntityLifecycle,
}

impl Position {
    pub fn new(
        id: PositionId,
        name: BoundedName,
        description: PositionDescription,
        lifecycle: EntityLifecycle,
    ) -> Self {
        Self {
            id,
            name,
            description,
            lifecycle,
        }
    }

    pub fn id(&self) -> PositionId { self.id }
    pub fn name(&self) -> &BoundedName { &self.name }
    pub fn description(&self) -> &PositionDescription { &self.description }
    pub fn lifecycle(&self) -> &EntityLifecycle { &self.lifecycle }
}
