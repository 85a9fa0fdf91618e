//! Value Objects module
//!
//! Immutable, validated primitives shared by departments, locations and
//! positions. Every type is built through a validating factory; there is no
//! other way to obtain an instance, including deserialization.

pub mod name;
pub mod department;
pub mod location;
pub mod description;
pub mod ids;

pub use name::BoundedName;
pub use department::{DepartmentIdentifier, DepartmentPath, DepartmentDepth};
pub use location::{LocationAddress, IanaTimeZone};
pub use description::PositionDescription;
pub use ids::{DepartmentId, LocationId, PositionId};

/// Validation failure raised by primitive and lifecycle factories.
///
/// Carries the name of the offending argument and the rule it broke.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {rule}")]
pub struct ValidationError {
    field: &'static str,
    rule: String,
}

impl ValidationError {
    /// Create a validation error for `field`
    pub fn new(field: &'static str, rule: impl Into<String>) -> Self {
        Self {
            field,
            rule: rule.into(),
        }
    }

    /// Name of the rejected argument
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Human-readable description of the violated rule
    pub fn rule(&self) -> &str {
        &self.rule
    }
}

/// Null, empty and whitespace-only strings are all blank.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("name", "cannot be blank");
        assert_eq!(err.field(), "name");
        assert_eq!(err.rule(), "cannot be blank");
        assert_eq!(err.to_string(), "invalid name: cannot be blank");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   \t\n"));
        assert!(!is_blank(" a "));
    }
}
