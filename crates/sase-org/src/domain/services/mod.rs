//! Domain services module
//!
//! Tree rules that span more than one department.

pub mod hierarchy;
pub mod index;

pub use hierarchy::{DepartmentHierarchy, HierarchyError};
pub use index::DepartmentIndex;
