//! Location Entity
//!
//! Physical site of an organization: name, address and time zone.

use serde::{Deserialize, Serialize};

use crate::domain::clock::{Clock, IdGenerator};
use crate::domain::lifecycle::EntityLifecycle;
use crate::domain::value_objects::{
    BoundedName, IanaTimeZone, LocationAddress, LocationId, ValidationError,
};

/// Location entity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    id: LocationId,
    name: BoundedName,
    address: LocationAddress,
    lifecycle: EntityLifecycle,
    timezone: IanaTimeZone,
}

impl Location {
    /// Assemble a location from validated parts
    pub fn new(
        id: LocationId,
        name: BoundedName,
        address: LocationAddress,
        lifecycle: EntityLifecycle,
        timezone: IanaTimeZone,
    ) -> Self {
        Self {
            id,
            name,
            address,
            lifecycle,
            timezone,
        }
    }

    /// Create a brand-new location with a fresh id and an initial lifecycle
    pub fn create(
        name: BoundedName,
        address: LocationAddress,
        timezone: IanaTimeZone,
        clock: &dyn Clock,
        ids: &dyn IdGenerator,
    ) -> Result<Self, ValidationError> {
        let id = LocationId::generate(ids)?;
        Ok(Self::new(id, name, address, EntityLifecycle::initial(clock)?, timezone))
    }

    pub fn id(&self) -> LocationId { self.id }
    pub fn name(&self) -> &BoundedName { &self.name }
    pub fn address(&self) -> &LocationAddress { &self.address }
    pub fn lifecycle(&self) -> &EntityLifecycle { &self.lifecycle }
    pub fn timezone(&self) -> &IanaTimeZone { &self.timezone }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::{FixedClock, SequentialIdGenerator};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    #[test]
    fn test_create_location() {
        let now = Utc.with_ymd_and_hms(2024, 2, 10, 10, 30, 0).unwrap();
        let clock = FixedClock::new(now);
        let ids = SequentialIdGenerator::starting_at(7);

        let location = Location::create(
            BoundedName::new("Moscow HQ").unwrap(),
            LocationAddress::new("Moscow, Tverskaya 1").unwrap(),
            IanaTimeZone::new("Europe/Moscow").unwrap(),
            &clock,
            &ids,
        )
        .unwrap();

        assert_eq!(location.id().as_uuid(), Uuid::from_u128(7));
        assert_eq!(location.name().as_str(), "Moscow HQ");
        assert_eq!(location.address().parts().len(), 2);
        assert_eq!(location.timezone().city(), "Moscow");
        assert_eq!(location.lifecycle().created_at(), now);
        assert!(location.lifecycle().is_active());
    }

    #[test]
    fn test_new_location_keeps_fields() {
        let clock = FixedClock::new(Utc::now());
        let id = LocationId::new(Uuid::new_v4()).unwrap();
        let lifecycle = EntityLifecycle::initial(&clock).unwrap();

        let location = Location::new(
            id,
            BoundedName::new("Berlin Office").unwrap(),
            LocationAddress::new("Berlin").unwrap(),
            lifecycle,
            IanaTimeZone::new("Europe/Berlin").unwrap(),
        );

        assert_eq!(location.id(), id);
        assert_eq!(location.lifecycle(), &lifecycle);
        assert_eq!(location.address().as_str(), "Berlin");
    }
}
