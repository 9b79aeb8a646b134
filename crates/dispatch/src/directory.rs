//! Driver lookup abstraction.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::warn;

use taxi_core::{DomainError, DomainResult, DriverId};
use taxi_orders::{Driver, PersonName, Vehicle};

/// A driver together with the vehicle they operate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRecord {
    pub driver: Driver,
    pub vehicle: Vehicle,
}

/// Resolves driver ids to driver + vehicle details.
///
/// The identifier is passed through as-is; no format validation happens here.
pub trait DriverDirectory: Send + Sync {
    fn find(&self, driver_id: DriverId) -> DomainResult<DriverRecord>;
}

impl<D> DriverDirectory for Arc<D>
where
    D: DriverDirectory + ?Sized,
{
    fn find(&self, driver_id: DriverId) -> DomainResult<DriverRecord> {
        (**self).find(driver_id)
    }
}

/// In-memory driver directory for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryDriverDirectory {
    inner: RwLock<HashMap<DriverId, DriverRecord>>,
}

impl InMemoryDriverDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory pre-populated with the demo driver (id 15).
    pub fn seeded() -> Self {
        let directory = Self::new();
        directory.register(
            Driver::new(DriverId::new(15), PersonName::new("Drive", "Driverson")),
            Vehicle::new("Baklazhan", "Lada sedan", "A123BT 66"),
        );
        directory
    }

    /// Insert or replace the record for the driver's id.
    pub fn register(&self, driver: Driver, vehicle: Vehicle) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(driver.id_typed(), DriverRecord { driver, vehicle });
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DriverDirectory for InMemoryDriverDirectory {
    fn find(&self, driver_id: DriverId) -> DomainResult<DriverRecord> {
        let found = self
            .inner
            .read()
            .ok()
            .and_then(|map| map.get(&driver_id).cloned());

        found.ok_or_else(|| {
            warn!(driver_id = %driver_id, "driver lookup failed");
            DomainError::not_found(format!("unknown driver id {driver_id}"))
        })
    }
}
