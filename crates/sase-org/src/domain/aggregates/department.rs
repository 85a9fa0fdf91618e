//! Department Entity
//!
//! One node of the organizational tree. The node knows its parent by id and
//! never holds its children; those are found by querying on `parent_id`.

use serde::{Deserialize, Serialize};

use crate::domain::lifecycle::EntityLifecycle;
use crate::domain::value_objects::{
    BoundedName, DepartmentDepth, DepartmentId, DepartmentIdentifier, DepartmentPath,
};

/// Department node
///
/// Assembled from already-validated primitives, so construction cannot fail.
/// Tree invariants (depth, path, acyclicity, identifier uniqueness) are
/// enforced by [`crate::domain::services::DepartmentHierarchy`] and the
/// services that own the tree. A root department has no parent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    id: DepartmentId,
    parent_id: Option<DepartmentId>,
    name: BoundedName,
    identifier: DepartmentIdentifier,
    path: DepartmentPath,
    depth: DepartmentDepth,
    lifecycle: EntityLifecycle,
}

impl Department {
    pub fn new(
        id: DepartmentId,
        parent_id: Option<DepartmentId>,
        name: BoundedName,
        identifier: DepartmentIdentifier,
        path: DepartmentPath,
        depth: DepartmentDepth,
        lifecycle: EntityLifecycle,
    ) -> Self {
        Self {
            id,
            parent_id,
            name,
            identifier,
            path,
            depth,
            lifecycle,
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> DepartmentId { self.id }
    pub fn parent_id(&self) -> Option<DepartmentId> { self.parent_id }
    pub fn name(&self) -> &BoundedName { &self.name }
    pub fn identifier(&self) -> &DepartmentIdentifier { &self.identifier }
    pub fn path(&self) -> &DepartmentPath { &self.path }
    pub fn depth(&self) -> DepartmentDepth { self.depth }
    pub fn lifecycle(&self) -> &EntityLifecycle { &self.lifecycle }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    // =========================================================================
    // Replacement (a changed department is a new instance)
    // =========================================================================

    /// Copy with a new name and lifecycle
    pub fn renamed(&self, name: BoundedName, lifecycle: EntityLifecycle) -> Self {
        Self {
            name,
            lifecycle,
            ..self.clone()
        }
    }

    /// Copy with a new lifecycle
    pub fn with_lifecycle(&self, lifecycle: EntityLifecycle) -> Self {
        Self {
            lifecycle,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::{FixedClock, SequentialIdGenerator};
    use chrono::{Duration, TimeZone, Utc};

    fn engineering() -> (Department, DepartmentId, DepartmentId, EntityLifecycle) {
        let ids = SequentialIdGenerator::new();
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap());
        let parent_id = DepartmentId::generate(&ids).unwrap();
        let id = DepartmentId::generate(&ids).unwrap();
        let lifecycle = EntityLifecycle::initial(&clock).unwrap();

        let department = Department::new(
            id,
            Some(parent_id),
            BoundedName::new("Engineering").unwrap(),
            DepartmentIdentifier::new("ENG").unwrap(),
            DepartmentPath::new("root/eng").unwrap(),
            DepartmentDepth::new(2).unwrap(),
            lifecycle,
        );
        (department, id, parent_id, lifecycle)
    }

    #[test]
    fn test_department_fields_round_trip() {
        let (department, id, parent_id, lifecycle) = engineering();

        assert_eq!(department.id(), id);
        assert_eq!(department.parent_id(), Some(parent_id));
        assert_eq!(department.name().as_str(), "Engineering");
        assert_eq!(department.identifier().as_str(), "ENG");
        assert_eq!(department.path().as_str(), "root/eng");
        assert_eq!(department.depth().value(), 2);
        assert_eq!(department.lifecycle(), &lifecycle);
        assert!(!department.is_root());
        assert!(department.is_active());
    }

    #[test]
    fn test_renamed_returns_new_instance() {
        let (department, ..) = engineering();
        let later = department.lifecycle().created_at() + Duration::hours(1);
        let lifecycle = department.lifecycle().touched(later).unwrap();

        let renamed = department.renamed(BoundedName::new("Platform Engineering").unwrap(), lifecycle);

        assert_eq!(renamed.name().as_str(), "Platform Engineering");
        assert_eq!(renamed.id(), department.id());
        assert_eq!(renamed.path(), department.path());
        assert_eq!(renamed.lifecycle().updated_at(), later);
        assert_eq!(department.name().as_str(), "Engineering");
    }

    #[test]
    fn test_department_serde() {
        let (department, ..) = engineering();
        let json = serde_json::to_string(&department).unwrap();
        let back: Department = serde_json::from_str(&json).unwrap();
        assert_eq!(back, department);
    }
}
