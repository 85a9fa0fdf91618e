//! Parent-to-children index over a set of departments
//!
//! Departments only point at their parent. This index supplies the other
//! direction for tree walks and whole-forest checks.

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use super::hierarchy::{DepartmentHierarchy, HierarchyError};
use crate::domain::aggregates::Department;
use crate::domain::value_objects::DepartmentId;

/// Read-only snapshot of a department forest
#[derive(Debug, Clone, Default)]
pub struct DepartmentIndex {
    nodes: HashMap<DepartmentId, Department>,
    children: HashMap<DepartmentId, BTreeSet<DepartmentId>>,
    roots: BTreeSet<DepartmentId>,
}

impl DepartmentIndex {
    pub fn build(departments: impl IntoIterator<Item = Department>) -> Self {
        let mut index = Self::default();
        for department in departments {
            match department.parent_id() {
                Some(parent) => {
                    index.children.entry(parent).or_default().insert(department.id());
                }
                None => {
                    index.roots.insert(department.id());
                }
            }
            index.nodes.insert(department.id(), department);
        }
        index
    }

    pub fn get(&self, id: DepartmentId) -> Option<&Department> {
        self.nodes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root departments, ordered by path
    pub fn roots(&self) -> Vec<&Department> {
        self.ordered(self.roots.iter())
    }

    /// Direct children of `id`, ordered by path
    pub fn children_of(&self, id: DepartmentId) -> Vec<&Department> {
        match self.children.get(&id) {
            Some(children) => self.ordered(children.iter()),
            None => Vec::new(),
        }
    }

    /// Ancestors of `id`, nearest first
    ///
    /// The walk is bounded by the node's depth; needing more steps means the
    /// parent links loop.
    pub fn ancestors_of(&self, id: DepartmentId) -> Result<Vec<&Department>, HierarchyError> {
        let Some(node) = self.nodes.get(&id) else {
            return Ok(Vec::new());
        };

        let bound = usize::try_from(node.depth().value()).unwrap_or(0).min(self.nodes.len());
        let mut ancestors = Vec::new();
        let mut current = node;

        while let Some(parent_id) = current.parent_id() {
            if ancestors.len() >= bound || parent_id == id {
                return Err(HierarchyError::Cycle { department: id });
            }
            let parent = self.nodes.get(&parent_id).ok_or(HierarchyError::UnknownParent {
                department: current.id(),
                parent: parent_id,
            })?;
            ancestors.push(parent);
            current = parent;
        }

        Ok(ancestors)
    }

    /// Every department below `id`, breadth-first
    pub fn descendants_of(&self, id: DepartmentId) -> Vec<&Department> {
        let mut seen = HashSet::from([id]);
        let mut queue = VecDeque::from([id]);
        let mut descendants = Vec::new();

        while let Some(current) = queue.pop_front() {
            for child in self.children_of(current) {
                if seen.insert(child.id()) {
                    queue.push_back(child.id());
                    descendants.push(child);
                }
            }
        }

        descendants
    }

    /// Check every tree rule across the whole forest
    ///
    /// - business identifiers are unique (case-insensitive)
    /// - every referenced parent exists
    /// - every node passes [`DepartmentHierarchy::validate_link`]
    ///
    /// Depth grows by exactly one along each valid link, so a forest that
    /// passes has no cycles.
    pub fn validate(&self, hierarchy: &DepartmentHierarchy) -> Result<(), HierarchyError> {
        let mut identifiers = HashSet::new();

        for node in self.ordered(self.nodes.keys()) {
            if !identifiers.insert(node.identifier().as_str().to_ascii_lowercase()) {
                return Err(HierarchyError::DuplicateIdentifier {
                    identifier: node.identifier().to_string(),
                });
            }

            let parent = match node.parent_id() {
                Some(parent_id) => Some(self.nodes.get(&parent_id).ok_or(
                    HierarchyError::UnknownParent {
                        department: node.id(),
                        parent: parent_id,
                    },
                )?),
                None => None,
            };

            hierarchy.validate_link(parent, node)?;
        }

        Ok(())
    }

    fn ordered<'a>(&self, ids: impl Iterator<Item = &'a DepartmentId>) -> Vec<&Department> {
        let mut departments: Vec<&Department> =
            ids.filter_map(|id| self.nodes.get(id)).collect();
        departments.sort_by(|a, b| a.path().as_str().cmp(b.path().as_str()));
        departments
    }
}
