//! Command handlers
//!
//! Application services that orchestrate use cases.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::application::dto::*;
use crate::config::{ConfigError, DirectoryConfig};
use crate::domain::aggregates::{Department, Location, Position};
use crate::domain::clock::{Clock, IdGenerator};
use crate::domain::events::{DepartmentEvent, DirectoryEvent, LocationEvent, PositionEvent};
use crate::domain::lifecycle::EntityLifecycle;
use crate::domain::services::{DepartmentHierarchy, HierarchyError};
use crate::domain::value_objects::{
    BoundedName, DepartmentId, DepartmentIdentifier, IanaTimeZone, LocationAddress, LocationId,
    PositionDescription, PositionId, ValidationError,
};
use crate::ports::inbound::{DepartmentUseCases, LocationUseCases, PositionUseCases, UseCaseError};
use crate::ports::outbound::{
    DepartmentRepository, EventPublisher, LocationRepository, PositionRepository,
};

// =============================================================================
// Departments
// =============================================================================

/// Department application service
///
/// Owns the tree: every department it saves satisfies the
/// [`DepartmentHierarchy`] rules.
pub struct DepartmentService {
    departments: Arc<dyn DepartmentRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    hierarchy: DepartmentHierarchy,
}

impl DepartmentService {
    pub fn new(
        departments: Arc<dyn DepartmentRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        config: &DirectoryConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            departments,
            event_publisher,
            clock,
            ids,
            hierarchy: DepartmentHierarchy::new(config),
        })
    }

    pub fn hierarchy(&self) -> &DepartmentHierarchy {
        &self.hierarchy
    }

    async fn load(&self, id: DepartmentId) -> Result<Department, UseCaseError> {
        self.departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| UseCaseError::NotFound(format!("department {}", id)))
    }

    /// Departments may only be placed under an active parent
    fn ensure_active_parent(parent: &Department) -> Result<(), UseCaseError> {
        if !parent.is_active() {
            warn!(parent_id = %parent.id(), "department placement under inactive parent rejected");
            return Err(ValidationError::new("parent_id", "is inactive").into());
        }
        Ok(())
    }

    /// Relink `department` and its subtree below `new_parent`, saving them as one batch.
    /// Returns the relinked department and the number of descendants moved with it.
    async fn relocate(
        &self,
        department: &Department,
        new_parent: Option<&Department>,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<(Department, usize), UseCaseError> {
        let moved = self
            .hierarchy
            .relink(department, new_parent, department.lifecycle().touched(now)?)?;
        let descendants = self.rebuild_subtree(&moved, now).await?;

        let mut batch = Vec::with_capacity(descendants.len() + 1);
        batch.push(moved.clone());
        batch.extend(descendants);
        self.departments.save_all(&batch).await?;
        Ok((moved, batch.len() - 1))
    }

    async fn publish(&self, event: DepartmentEvent) -> Result<(), UseCaseError> {
        self.event_publisher
            .publish(vec![DirectoryEvent::Department(event)])
            .await?;
        Ok(())
    }

    /// Rebuild every descendant of `moved` below its new position
    async fn rebuild_subtree(
        &self,
        moved: &Department,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<Vec<Department>, UseCaseError> {
        let mut rebuilt = Vec::new();
        let mut seen = HashSet::from([moved.id()]);
        let mut queue = VecDeque::from([moved.clone()]);

        while let Some(parent) = queue.pop_front() {
            for child in self.departments.find_children(parent.id()).await? {
                if !seen.insert(child.id()) {
                    return Err(HierarchyError::Cycle { department: child.id() }.into());
                }
                let placed = self.hierarchy.child(
                    &parent,
                    child.id(),
                    child.name().clone(),
                    child.identifier().clone(),
                    child.lifecycle().touched(now)?,
                )?;
                queue.push_back(placed.clone());
                rebuilt.push(placed);
            }
        }

        Ok(rebuilt)
    }
}

#[async_trait]
impl DepartmentUseCases for DepartmentService {
    async fn create_department(&self, command: CreateDepartmentCommand) -> Result<Department, UseCaseError> {
        let name = BoundedName::new(command.name)?;
        let identifier = DepartmentIdentifier::new(command.identifier)?;

        if self.departments.find_by_identifier(&identifier).await?.is_some() {
            warn!(identifier = %identifier, "department identifier already in use");
            return Err(HierarchyError::DuplicateIdentifier {
                identifier: identifier.to_string(),
            }
            .into());
        }

        let id = DepartmentId::generate(self.ids.as_ref())?;
        let lifecycle = EntityLifecycle::initial(self.clock.as_ref())?;

        let placed = match command.parent_id {
            Some(parent_id) => {
                let parent = self.load(DepartmentId::new(parent_id)?).await?;
                Self::ensure_active_parent(&parent)?;
                self.hierarchy.child(&parent, id, name, identifier.clone(), lifecycle)
            }
            None => self.hierarchy.root(id, name, identifier.clone(), lifecycle),
        };
        let department = placed.inspect_err(|err| {
            warn!(identifier = %identifier, error = %err, "department placement rejected");
        })?;

        self.departments.save(&department).await.inspect_err(|err| {
            warn!(identifier = %identifier, error = %err, "department save rejected");
        })?;
        self.publish(DepartmentEvent::Created {
            department_id: department.id(),
            parent_id: department.parent_id(),
            path: department.path().clone(),
            created_at: lifecycle.created_at(),
        })
        .await?;

        info!(
            department_id = %department.id(),
            identifier = %department.identifier(),
            path = %department.path(),
            "department created"
        );
        Ok(department)
    }

    async fn rename_department(&self, command: RenameDepartmentCommand) -> Result<Department, UseCaseError> {
        let id = DepartmentId::new(command.department_id)?;
        let name = BoundedName::new(command.name)?;
        let department = self.load(id).await?;

        let now = self.clock.now();
        let renamed = department.renamed(name, department.lifecycle().touched(now)?);

        self.departments.save(&renamed).await?;
        self.publish(DepartmentEvent::Renamed {
            department_id: id,
            old_name: department.name().to_string(),
            new_name: renamed.name().to_string(),
            renamed_at: now,
        })
        .await?;

        info!(department_id = %id, name = %renamed.name(), "department renamed");
        Ok(renamed)
    }

    async fn move_department(&self, command: MoveDepartmentCommand) -> Result<Department, UseCaseError> {
        let id = DepartmentId::new(command.department_id)?;
        let department = self.load(id).await?;

        let new_parent = match command.new_parent_id {
            Some(parent_id) => Some(self.load(DepartmentId::new(parent_id)?).await?),
            None => None,
        };
        let new_parent_id = new_parent.as_ref().map(Department::id);

        if department.parent_id() == new_parent_id {
            return Ok(department);
        }

        if let Err(err) = self.hierarchy.ensure_can_move(&department, new_parent.as_ref()) {
            warn!(department_id = %id, error = %err, "department move rejected");
            return Err(err.into());
        }
        if let Some(parent) = new_parent.as_ref() {
            Self::ensure_active_parent(parent)?;
        }

        let now = self.clock.now();
        let (moved, descendants_moved) = self
            .relocate(&department, new_parent.as_ref(), now)
            .await
            .inspect_err(|err| {
                warn!(department_id = %id, error = %err, "department move rejected");
            })?;

        self.publish(DepartmentEvent::Moved {
            department_id: id,
            from_parent: department.parent_id(),
            to_parent: new_parent_id,
            old_path: department.path().clone(),
            new_path: moved.path().clone(),
            descendants_moved,
            moved_at: now,
        })
        .await?;

        info!(
            department_id = %id,
            from = %department.path(),
            to = %moved.path(),
            descendants = descendants_moved,
            "department moved"
        );
        Ok(moved)
    }

    async fn deactivate_department(&self, id: DepartmentId) -> Result<Department, UseCaseError> {
        let department = self.load(id).await?;
        if !department.is_active() {
            return Ok(department);
        }

        let children = self.departments.find_children(id).await?;
        if children.iter().any(Department::is_active) {
            warn!(department_id = %id, "cannot deactivate department with active children");
            return Err(ValidationError::new("department_id", "has active child departments").into());
        }

        let now = self.clock.now();
        let deactivated = department.with_lifecycle(department.lifecycle().deactivated(now)?);

        self.departments.save(&deactivated).await?;
        self.publish(DepartmentEvent::Deactivated {
            department_id: id,
            deactivated_at: now,
        })
        .await?;

        info!(department_id = %id, "department deactivated");
        Ok(deactivated)
    }

    async fn get_department(&self, id: DepartmentId) -> Result<Option<Department>, UseCaseError> {
        Ok(self.departments.find_by_id(id).await?)
    }

    async fn list_children(&self, id: DepartmentId) -> Result<Vec<Department>, UseCaseError> {
        Ok(self.departments.find_children(id).await?)
    }

    async fn list_ancestors(&self, id: DepartmentId) -> Result<Vec<Department>, UseCaseError> {
        let department = self.load(id).await?;
        let bound = usize::try_from(department.depth().value()).unwrap_or(0);

        let mut ancestors: Vec<Department> = Vec::new();
        let mut next = department.parent_id();
        while let Some(parent_id) = next {
            if ancestors.len() >= bound || parent_id == id {
                return Err(HierarchyError::Cycle { department: id }.into());
            }
            let parent = self.load(parent_id).await?;
            next = parent.parent_id();
            ancestors.push(parent);
        }

        Ok(ancestors)
    }
}

// =============================================================================
// Locations
// =============================================================================

/// Location application service
pub struct LocationService {
    locations: Arc<dyn LocationRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl LocationService {
    pub fn new(
        locations: Arc<dyn LocationRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            locations,
            event_publisher,
            clock,
            ids,
        }
    }
}

#[async_trait]
impl LocationUseCases for LocationService {
    async fn create_location(&self, command: CreateLocationCommand) -> Result<Location, UseCaseError> {
        let name = BoundedName::new(command.name)?;
        let address = LocationAddress::new(&command.address)?;
        let timezone = IanaTimeZone::new(command.timezone)?;

        let location = Location::create(
            name,
            address,
            timezone,
            self.clock.as_ref(),
            self.ids.as_ref(),
        )?;

        self.locations.save(&location).await?;
        self.event_publisher
            .publish(vec![DirectoryEvent::Location(LocationEvent::Created {
                location_id: location.id(),
                created_at: location.lifecycle().created_at(),
            })])
            .await?;

        info!(location_id = %location.id(), timezone = %location.timezone(), "location created");
        Ok(location)
    }

    async fn get_location(&self, id: LocationId) -> Result<Option<Location>, UseCaseError> {
        Ok(self.locations.find_by_id(id).await?)
    }

    async fn list_locations(&self) -> Result<Vec<Location>, UseCaseError> {
        Ok(self.locations.list().await?)
    }
}

// =============================================================================
// Positions
// =============================================================================

/// Position application service
pub struct PositionService {
    positions: Arc<dyn PositionRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl PositionService {
    pub fn new(
        positions: Arc<dyn PositionRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            positions,
            event_publisher,
            clock,
            ids,
        }
    }
}

#[async_trait]
impl PositionUseCases for PositionService {
    async fn create_position(&self, command: CreatePositionCommand) -> Result<Position, UseCaseError> {
        let name = BoundedName::new(command.name)?;
        let description = PositionDescription::new(command.description)?;

        let position = Position::new(
            PositionId::generate(self.ids.as_ref())?,
            name,
            description,
            EntityLifecycle::initial(self.clock.as_ref())?,
        );

        self.positions.save(&position).await?;
        self.event_publisher
            .publish(vec![DirectoryEvent::Position(PositionEvent::Created {
                position_id: position.id(),
                created_at: position.lifecycle().created_at(),
            })])
            .await?;

        info!(position_id = %position.id(), name = %position.name(), "position created");
        Ok(position)
    }

    async fn get_position(&self, id: PositionId) -> Result<Option<Position>, UseCaseError> {
        Ok(self.positions.find_by_id(id).await?)
    }

    async fn list_positions(&self) -> Result<Vec<Position>, UseCaseError> {
        Ok(self.positions.list().await?)
    }
}
