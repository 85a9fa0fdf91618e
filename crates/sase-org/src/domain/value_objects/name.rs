//! Bounded Name Value Object
//!
//! Display name used by departments, locations and positions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{is_blank, ValidationError};

/// Non-blank name between 3 and 128 characters.
///
/// Case and surrounding whitespace are preserved as given.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BoundedName(String);

impl BoundedName {
    /// Shortest accepted name, in characters
    pub const MIN_LENGTH: usize = 3;
    /// Longest accepted name, in characters
    pub const MAX_LENGTH: usize = 128;

    /// Create a validated name
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if is_blank(&value) {
            return Err(ValidationError::new("name", "cannot be blank"));
        }

        let length = value.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(ValidationError::new(
                "name",
                format!("cannot exceed {} characters", Self::MAX_LENGTH),
            ));
        }
        if length < Self::MIN_LENGTH {
            return Err(ValidationError::new(
                "name",
                format!(
                    "must be between {} and {} characters",
                    Self::MIN_LENGTH,
                    Self::MAX_LENGTH
                ),
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BoundedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for BoundedName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for BoundedName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BoundedName> for String {
    fn from(name: BoundedName) -> Self {
        name.0
    }
}
