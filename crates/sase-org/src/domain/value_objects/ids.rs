//! Entity identifiers
//!
//! UUID-backed identifiers that can never hold the nil UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::ValidationError;
use crate::domain::clock::IdGenerator;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "Uuid", into = "Uuid")]
        pub struct $name(Uuid);

        impl $name {
            /// Wrap an existing UUID, rejecting the nil sentinel
            pub fn new(value: Uuid) -> Result<Self, ValidationError> {
                if value.is_nil() {
                    return Err(ValidationError::new($field, "cannot be the nil UUID"));
                }
                Ok(Self(value))
            }

            /// Draw a fresh identifier from `ids`
            pub fn generate(ids: &dyn IdGenerator) -> Result<Self, ValidationError> {
                Self::new(ids.next_id())
            }

            /// Parse the hyphenated textual form
            pub fn parse_str(value: &str) -> Result<Self, ValidationError> {
                let uuid = Uuid::parse_str(value.trim())
                    .map_err(|e| ValidationError::new($field, format!("not a UUID: {}", e)))?;
                Self::new(uuid)
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<Uuid> for $name {
            type Error = ValidationError;

            fn try_from(value: Uuid) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id!(
    /// Department identifier; also used for a department's parent reference
    DepartmentId,
    "department_id"
);

entity_id!(
    /// Location identifier
    LocationId,
    "location_id"
);

entity_id!(
    /// Position identifier
    PositionId,
    "position_id"
);
