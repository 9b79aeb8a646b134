//! Driver entity.

use serde::{Deserialize, Serialize};

use taxi_core::{DriverId, Entity};

use crate::value::{PersonName, Vehicle};

/// A driver. Identity is the [`DriverId`]; the vehicle is attached when the
/// driver is assigned to an order, not at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    id: DriverId,
    name: PersonName,
    vehicle: Option<Vehicle>,
}

impl Driver {
    pub fn new(id: DriverId, name: PersonName) -> Self {
        Self {
            id,
            name,
            vehicle: None,
        }
    }

    pub fn id_typed(&self) -> DriverId {
        self.id
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn vehicle(&self) -> Option<&Vehicle> {
        self.vehicle.as_ref()
    }

    pub(crate) fn with_vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicle = Some(vehicle);
        self
    }
}

impl Entity for Driver {
    type Id = DriverId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl PartialEq for Driver {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Driver {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drivers_are_equal_by_identity() {
        let a = Driver::new(DriverId::new(15), PersonName::new("Drive", "Driverson"));
        let renamed = Driver::new(DriverId::new(15), PersonName::new("Other", "Name"));
        let other = Driver::new(DriverId::new(16), PersonName::new("Drive", "Driverson"));

        assert_eq!(a, renamed);
        assert_ne!(a, other);
    }

    #[test]
    fn vehicle_is_absent_until_attached() {
        let driver = Driver::new(DriverId::new(15), PersonName::new("Drive", "Driverson"));
        assert!(driver.vehicle().is_none());

        let driver = driver.with_vehicle(Vehicle::new("Baklazhan", "Lada sedan", "A123BT 66"));
        assert_eq!(driver.vehicle().map(Vehicle::model), Some("Lada sedan"));
    }
}
