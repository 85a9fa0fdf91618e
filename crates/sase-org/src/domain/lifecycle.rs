//! Entity Lifecycle Record
//!
//! Creation/update timestamps plus an active flag, attached to every entity.
//! The record is immutable: a change produces a new record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::clock::Clock;
use crate::domain::value_objects::ValidationError;

/// Lifecycle record of an entity
///
/// # Invariants
/// - Neither timestamp is the minimum or maximum representable instant
/// - `updated_at >= created_at`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LifecycleFields")]
pub struct EntityLifecycle {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    is_active: bool,
}

impl EntityLifecycle {
    /// Reconstruct a record from stored values
    pub fn new(
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        is_active: bool,
    ) -> Result<Self, ValidationError> {
        if is_sentinel(&created_at) {
            return Err(ValidationError::new("created_at", "is not a valid timestamp"));
        }
        if is_sentinel(&updated_at) {
            return Err(ValidationError::new("updated_at", "is not a valid timestamp"));
        }
        if updated_at < created_at {
            return Err(ValidationError::new(
                "updated_at",
                "cannot precede created_at",
            ));
        }

        Ok(Self {
            created_at,
            updated_at,
            is_active,
        })
    }

    /// Record for a newly created entity: active, both timestamps at `now`
    pub fn initial(clock: &dyn Clock) -> Result<Self, ValidationError> {
        let now = clock.now();
        Self::new(now, now, true)
    }

    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }
    pub fn is_active(&self) -> bool { self.is_active }

    /// Same record, updated at `now`
    pub fn touched(&self, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        Self::new(self.created_at, now, self.is_active)
    }

    /// Inactive copy, updated at `now`
    pub fn deactivated(&self, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        Self::new(self.created_at, now, false)
    }

    /// Active copy, updated at `now`
    pub fn activated(&self, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        Self::new(self.created_at, now, true)
    }
}

fn is_sentinel(at: &DateTime<Utc>) -> bool {
    *at == DateTime::<Utc>::MIN_UTC || *at == DateTime::<Utc>::MAX_UTC
}

#[derive(Deserialize)]
struct LifecycleFields {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    is_active: bool,
}

impl TryFrom<LifecycleFields> for EntityLifecycle {
    type Error = ValidationError;

    fn try_from(fields: LifecycleFields) -> Result<Self, Self::Error> {
        Self::new(fields.created_at, fields.updated_at, fields.is_active)
    }
}
