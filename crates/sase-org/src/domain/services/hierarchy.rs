//! Department hierarchy rules
//!
//! A [`Department`] does not check its own position in the tree. These rules
//! do, and every service that creates or relinks a department goes through
//! them:
//! - root depth is 1 and a root has no parent
//! - child depth = parent depth + 1, bounded by `max_depth`
//! - child path = parent path + separator + child segment
//! - no department is its own ancestor

use crate::config::DirectoryConfig;
use crate::domain::aggregates::Department;
use crate::domain::lifecycle::EntityLifecycle;
use crate::domain::value_objects::{
    BoundedName, DepartmentDepth, DepartmentId, DepartmentIdentifier, DepartmentPath,
    ValidationError,
};

/// Tree invariant violations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HierarchyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("department {department} is not linked to the expected parent")]
    ParentMismatch { department: DepartmentId },

    #[error("department {department} has depth {actual}, expected {expected}")]
    DepthMismatch {
        department: DepartmentId,
        expected: i16,
        actual: i16,
    },

    #[error("department {department} has path '{actual}', expected '{expected}'")]
    PathMismatch {
        department: DepartmentId,
        expected: String,
        actual: String,
    },

    #[error("tree depth limit of {max} exceeded")]
    DepthLimitExceeded { max: i16 },

    #[error("department {department} would become its own ancestor")]
    Cycle { department: DepartmentId },

    #[error("business identifier '{identifier}' is already in use")]
    DuplicateIdentifier { identifier: String },

    #[error("parent {parent} of department {department} does not exist")]
    UnknownParent {
        department: DepartmentId,
        parent: DepartmentId,
    },
}

/// Builds and checks department nodes against the tree rules
#[derive(Debug, Clone)]
pub struct DepartmentHierarchy {
    separator: char,
    max_depth: i16,
    lowercase_segments: bool,
}

impl DepartmentHierarchy {
    pub fn new(config: &DirectoryConfig) -> Self {
        Self {
            separator: config.path_separator,
            max_depth: config.max_depth,
            lowercase_segments: config.lowercase_path_segments,
        }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn max_depth(&self) -> i16 {
        self.max_depth
    }

    /// Path segment contributed by a department's business identifier
    pub fn path_segment(&self, identifier: &DepartmentIdentifier) -> String {
        if self.lowercase_segments {
            identifier.as_str().to_ascii_lowercase()
        } else {
            identifier.as_str().to_string()
        }
    }

    /// Path a department with `identifier` must have below `parent`
    pub fn expected_path(
        &self,
        parent: Option<&Department>,
        identifier: &DepartmentIdentifier,
    ) -> Result<DepartmentPath, ValidationError> {
        let segment = self.path_segment(identifier);
        match parent {
            Some(parent) => Ok(parent.path().join(self.separator, &segment)),
            None => DepartmentPath::new(segment),
        }
    }

    /// Depth a department must have below `parent`
    pub fn expected_depth(
        &self,
        parent: Option<&Department>,
    ) -> Result<DepartmentDepth, HierarchyError> {
        let depth = match parent {
            Some(parent) => parent.depth().next(),
            None => Some(DepartmentDepth::ROOT),
        };
        depth
            .filter(|depth| depth.value() <= self.max_depth)
            .ok_or(HierarchyError::DepthLimitExceeded { max: self.max_depth })
    }

    /// Build a root department
    pub fn root(
        &self,
        id: DepartmentId,
        name: BoundedName,
        identifier: DepartmentIdentifier,
        lifecycle: EntityLifecycle,
    ) -> Result<Department, HierarchyError> {
        self.place(None, id, name, identifier, lifecycle)
    }

    /// Build a department directly below `parent`
    pub fn child(
        &self,
        parent: &Department,
        id: DepartmentId,
        name: BoundedName,
        identifier: DepartmentIdentifier,
        lifecycle: EntityLifecycle,
    ) -> Result<Department, HierarchyError> {
        if id == parent.id() {
            return Err(HierarchyError::Cycle { department: id });
        }
        self.place(Some(parent), id, name, identifier, lifecycle)
    }

    /// Rebuild `node` below `new_parent` (or as a root), keeping its identity
    pub fn relink(
        &self,
        node: &Department,
        new_parent: Option<&Department>,
        lifecycle: EntityLifecycle,
    ) -> Result<Department, HierarchyError> {
        self.ensure_can_move(node, new_parent)?;
        self.place(
            new_parent,
            node.id(),
            node.name().clone(),
            node.identifier().clone(),
            lifecycle,
        )
    }

    /// Reject moves that would put `node` below itself
    pub fn ensure_can_move(
        &self,
        node: &Department,
        new_parent: Option<&Department>,
    ) -> Result<(), HierarchyError> {
        if let Some(parent) = new_parent {
            if parent.id() == node.id() || node.path().is_ancestor_of(parent.path(), self.separator) {
                return Err(HierarchyError::Cycle { department: node.id() });
            }
        }
        Ok(())
    }

    /// Check the parent link, depth and path of an existing department
    pub fn validate_link(
        &self,
        parent: Option<&Department>,
        node: &Department,
    ) -> Result<(), HierarchyError> {
        let linked = match parent {
            Some(parent) => node.parent_id() == Some(parent.id()) && parent.id() != node.id(),
            None => node.parent_id().is_none(),
        };
        if !linked {
            return Err(HierarchyError::ParentMismatch { department: node.id() });
        }

        let depth = self.expected_depth(parent)?;
        if depth != node.depth() {
            return Err(HierarchyError::DepthMismatch {
                department: node.id(),
                expected: depth.value(),
                actual: node.depth().value(),
            });
        }

        let path = self.expected_path(parent, node.identifier())?;
        if &path != node.path() {
            return Err(HierarchyError::PathMismatch {
                department: node.id(),
                expected: path.to_string(),
                actual: node.path().to_string(),
            });
        }

        Ok(())
    }

    /// Split a path into its segments for display
    pub fn path_segments<'a>(&self, path: &'a DepartmentPath) -> Vec<&'a str> {
        path.segments(self.separator).collect()
    }

    fn place(
        &self,
        parent: Option<&Department>,
        id: DepartmentId,
        name: BoundedName,
        identifier: DepartmentIdentifier,
        lifecycle: EntityLifecycle,
    ) -> Result<Department, HierarchyError> {
        let depth = self.expected_depth(parent)?;
        let path = self.expected_path(parent, &identifier)?;
        Ok(Department::new(
            id,
            parent.map(Department::id),
            name,
            identifier,
            path,
            depth,
            lifecycle,
        ))
    }
}

impl Default for DepartmentHierarchy {
    fn default() -> Self {
        Self::new(&DirectoryConfig::default())
    }
}
