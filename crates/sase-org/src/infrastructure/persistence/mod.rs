//! In-memory repository implementations (for testing and development)

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::domain::aggregates::{Department, Location, Position};
use crate::domain::events::DirectoryEvent;
use crate::domain::value_objects::{DepartmentId, DepartmentIdentifier, LocationId, PositionId};
use crate::ports::outbound::{
    DepartmentRepository, EventPublisher, LocationRepository, PositionRepository, RepoResult,
    RepositoryError,
};

/// In-memory department repository
#[derive(Default)]
pub struct InMemoryDepartmentRepository {
    departments: RwLock<HashMap<DepartmentId, Department>>,
}

impl InMemoryDepartmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier owned by a different department, if any
    fn conflicting(
        departments: &HashMap<DepartmentId, Department>,
        candidate: &Department,
    ) -> Option<DepartmentIdentifier> {
        departments
            .values()
            .find(|d| d.id() != candidate.id() && d.identifier().matches(candidate.identifier()))
            .map(|d| d.identifier().clone())
    }
}

#[async_trait]
impl DepartmentRepository for InMemoryDepartmentRepository {
    async fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        Ok(self.departments.read().get(&id).cloned())
    }

    async fn find_by_identifier(
        &self,
        identifier: &DepartmentIdentifier,
    ) -> RepoResult<Option<Department>> {
        Ok(self
            .departments
            .read()
            .values()
            .find(|d| d.identifier().matches(identifier))
            .cloned())
    }

    async fn find_children(&self, parent_id: DepartmentId) -> RepoResult<Vec<Department>> {
        let mut children: Vec<_> = self
            .departments
            .read()
            .values()
            .filter(|d| d.parent_id() == Some(parent_id))
            .cloned()
            .collect();
        children.sort_by(|a, b| a.path().as_str().cmp(b.path().as_str()));
        Ok(children)
    }

    async fn find_roots(&self) -> RepoResult<Vec<Department>> {
        let mut roots: Vec<_> = self
            .departments
            .read()
            .values()
            .filter(|d| d.is_root())
            .cloned()
            .collect();
        roots.sort_by(|a, b| a.path().as_str().cmp(b.path().as_str()));
        Ok(roots)
    }

    async fn find_all(&self) -> RepoResult<Vec<Department>> {
        Ok(self.departments.read().values().cloned().collect())
    }

    async fn save(&self, department: &Department) -> RepoResult<()> {
        self.save_all(std::slice::from_ref(department)).await
    }

    async fn save_all(&self, departments: &[Department]) -> RepoResult<()> {
        let mut stored = self.departments.write();

        // check everything first so a rejected batch leaves no trace
        let mut staged = stored.clone();
        for department in departments {
            if let Some(identifier) = Self::conflicting(&staged, department) {
                return Err(RepositoryError::DuplicateKey(identifier.to_string()));
            }
            staged.insert(department.id(), department.clone());
        }

        *stored = staged;
        Ok(())
    }
}

/// In-memory location repository
#[derive(Default)]
pub struct InMemoryLocationRepository {
    locations: RwLock<HashMap<LocationId, Location>>,
}

impl InMemoryLocationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocationRepository for InMemoryLocationRepository {
    async fn find_by_id(&self, id: LocationId) -> RepoResult<Option<Location>> {
        Ok(self.locations.read().get(&id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Location>> {
        let mut locations: Vec<_> = self.locations.read().values().cloned().collect();
        locations.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        Ok(locations)
    }

    async fn save(&self, location: &Location) -> RepoResult<()> {
        self.locations.write().insert(location.id(), location.clone());
        Ok(())
    }
}

/// In-memory position repository
#[derive(Default)]
pub struct InMemoryPositionRepository {
    positions: RwLock<HashMap<PositionId, Position>>,
}

impl InMemoryPositionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PositionRepository for InMemoryPositionRepository {
    async fn find_by_id(&self, id: PositionId) -> RepoResult<Option<Position>> {
        Ok(self.positions.read().get(&id).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Position>> {
        let mut positions: Vec<_> = self.positions.read().values().cloned().collect();
        positions.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));
        Ok(positions)
    }

    async fn save(&self, position: &Position) -> RepoResult<()> {
        self.positions.write().insert(position.id(), position.clone());
        Ok(())
    }
}

/// Event publisher that keeps everything it was given
#[derive(Default)]
pub struct InMemoryEventPublisher {
    events: RwLock<Vec<DirectoryEvent>>,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of published events, oldest first
    pub fn events(&self) -> Vec<DirectoryEvent> {
        self.events.read().clone()
    }

    /// Drain published events
    pub fn take_events(&self) -> Vec<DirectoryEvent> {
        std::mem::take(&mut *self.events.write())
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, events: Vec<DirectoryEvent>) -> RepoResult<()> {
        self.events.write().extend(events);
        Ok(())
    }
}

/// No-op event publisher
#[derive(Default)]
pub struct NoOpEventPublisher;

#[async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _events: Vec<DirectoryEvent>) -> RepoResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::{FixedClock, SequentialIdGenerator};
    use crate::domain::lifecycle::EntityLifecycle;
    use crate::domain::services::DepartmentHierarchy;
    use crate::domain::value_objects::{BoundedName, PositionDescription};
    use chrono::Utc;

    fn root(ids: &SequentialIdGenerator, code: &str) -> Department {
        DepartmentHierarchy::default()
            .root(
                DepartmentId::generate(ids).unwrap(),
                BoundedName::new(format!("{code} division")).unwrap(),
                DepartmentIdentifier::new(code).unwrap(),
                EntityLifecycle::initial(&FixedClock::new(Utc::now())).unwrap(),
            )
            .unwrap()
    }

    #[tokio::test]
    async fn test_department_save_and_find() {
        let repo = InMemoryDepartmentRepository::new();
        let ids = SequentialIdGenerator::new();
        let hq = root(&ids, "HQ");

        repo.save(&hq).await.unwrap();

        assert_eq!(repo.find_by_id(hq.id()).await.unwrap(), Some(hq.clone()));
        let by_code = repo
            .find_by_identifier(&DepartmentIdentifier::new("hq").unwrap())
            .await
            .unwrap();
        assert_eq!(by_code.map(|d| d.id()), Some(hq.id()));
        assert_eq!(repo.find_roots().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_identifier_rejected() {
        let repo = InMemoryDepartmentRepository::new();
        let ids = SequentialIdGenerator::new();

        repo.save(&root(&ids, "Sales")).await.unwrap();
        let err = repo.save(&root(&ids, "SALES")).await.unwrap_err();

        assert!(matches!(err, RepositoryError::DuplicateKey(_)));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_all_is_all_or_nothing() {
        let repo = InMemoryDepartmentRepository::new();
        let ids = SequentialIdGenerator::new();
        let batch = vec![root(&ids, "Legal"), root(&ids, "Audit"), root(&ids, "legal")];

        assert!(repo.save_all(&batch).await.is_err());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_resave_same_department() {
        let repo = InMemoryDepartmentRepository::new();
        let ids = SequentialIdGenerator::new();
        let hq = root(&ids, "HQ");

        repo.save(&hq).await.unwrap();
        repo.save(&hq).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_position_repository() {
        let repo = InMemoryPositionRepository::new();
        let ids = SequentialIdGenerator::new();
        let position = Position::new(
            PositionId::generate(&ids).unwrap(),
            BoundedName::new("Analyst").unwrap(),
            PositionDescription::new("Prepares quarterly reports").unwrap(),
            EntityLifecycle::initial(&FixedClock::new(Utc::now())).unwrap(),
        );

        repo.save(&position).await.unwrap();
        assert_eq!(repo.find_by_id(position.id()).await.unwrap(), Some(position));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_event_publisher_records() {
        let publisher = InMemoryEventPublisher::new();
        let ids = SequentialIdGenerator::new();
        let event = DirectoryEvent::Position(crate::domain::events::PositionEvent::Created {
            position_id: PositionId::generate(&ids).unwrap(),
            created_at: Utc::now(),
        });

        publisher.publish(vec![event.clone()]).await.unwrap();
        assert_eq!(publisher.events(), vec![event.clone()]);
        assert_eq!(publisher.take_events(), vec![event]);
        assert!(publisher.events().is_empty());
    }

    #[tokio::test]
    async fn test_noop_publisher_accepts_events() {
        let ids = SequentialIdGenerator::new();
        let event = DirectoryEvent::Position(crate::domain::events::PositionEvent::Created {
            position_id: PositionId::generate(&ids).unwrap(),
            created_at: Utc::now(),
        });

        assert!(NoOpEventPublisher.publish(vec![event]).await.is_ok());
    }
}
