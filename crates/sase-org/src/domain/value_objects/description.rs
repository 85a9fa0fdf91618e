//! Position Description Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{is_blank, ValidationError};

/// Free-text description of a job position, at most 500 characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PositionDescription(String);

impl PositionDescription {
    /// Longest accepted description, in characters
    pub const MAX_LENGTH: usize = 500;

    /// Create a validated description
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if is_blank(&value) {
            return Err(ValidationError::new("description", "cannot be blank"));
        }
        if value.chars().count() > Self::MAX_LENGTH {
            return Err(ValidationError::new(
                "description",
                format!("cannot exceed {} characters", Self::MAX_LENGTH),
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PositionDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PositionDescription {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PositionDescription {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PositionDescription> for String {
    fn from(description: PositionDescription) -> Self {
        description.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_valid() {
        let description = PositionDescription::new("Builds and runs the platform").unwrap();
        assert_eq!(description.as_str(), "Builds and runs the platform");
        assert!(PositionDescription::new("x").is_ok());
    }

    #[test]
    fn test_description_length_limit() {
        assert!(PositionDescription::new("a".repeat(500)).is_ok());
        assert!(PositionDescription::new("a".repeat(501)).is_err());
    }

    #[test]
    fn test_description_blank_fails() {
        let err = PositionDescription::new(" \n ").unwrap_err();
        assert_eq!(err.field(), "description");
    }
}
