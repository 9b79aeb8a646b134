use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use taxi_core::{AggregateRoot, Clock, DomainError, DomainResult, Entity, InvalidStateKind, OrderId};

use crate::driver::Driver;
use crate::snapshot::OrderSnapshot;
use crate::value::{Address, PersonName, Vehicle};

/// Rendering format for timestamps in human-readable order summaries.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Taxi order status lifecycle.
///
/// `WaitingForDriver -> WaitingCarArrival -> InProgress -> Finished`, with
/// `Canceled` reachable before the ride starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    WaitingForDriver,
    WaitingCarArrival,
    InProgress,
    Finished,
    Canceled,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::WaitingForDriver => "WaitingForDriver",
            OrderStatus::WaitingCarArrival => "WaitingCarArrival",
            OrderStatus::InProgress => "InProgress",
            OrderStatus::Finished => "Finished",
            OrderStatus::Canceled => "Canceled",
        }
    }

    /// Whether the ride has started (in progress or already finished).
    pub fn ride_started(self) -> bool {
        matches!(self, OrderStatus::InProgress | OrderStatus::Finished)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Finished | OrderStatus::Canceled)
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate root: TaxiOrder.
///
/// Client name, pickup address and creation time are fixed at creation.
/// Everything else changes only through the transition methods below, each of
/// which either applies fully (status, driver, timestamp, version) or returns
/// an error and leaves the order untouched.
#[derive(Clone)]
pub struct TaxiOrder {
    id: OrderId,
    client_name: PersonName,
    pickup: Address,
    created_at: DateTime<Utc>,
    destination: Option<Address>,
    driver: Option<Driver>,
    status: OrderStatus,
    /// Last time each status was entered.
    entered_at: BTreeMap<OrderStatus, DateTime<Utc>>,
    version: u64,
    clock: Arc<dyn Clock>,
}

impl core::fmt::Debug for TaxiOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TaxiOrder")
            .field("id", &self.id)
            .field("client_name", &self.client_name)
            .field("pickup", &self.pickup)
            .field("created_at", &self.created_at)
            .field("destination", &self.destination)
            .field("driver", &self.driver)
            .field("status", &self.status)
            .field("entered_at", &self.entered_at)
            .field("version", &self.version)
            .finish_non_exhaustive()
    }
}

impl TaxiOrder {
    /// Create a new order waiting for a driver, stamped with the clock's current time.
    pub fn create(
        id: OrderId,
        client_name: PersonName,
        pickup: Address,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let created_at = clock.now();
        let mut entered_at = BTreeMap::new();
        entered_at.insert(OrderStatus::WaitingForDriver, created_at);

        debug!(order_id = %id, client = %client_name, pickup = %pickup, "taxi order created");

        Self {
            id,
            client_name,
            pickup,
            created_at,
            destination: None,
            driver: None,
            status: OrderStatus::WaitingForDriver,
            entered_at,
            version: 0,
            clock,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn client_name(&self) -> &PersonName {
        &self.client_name
    }

    pub fn pickup(&self) -> &Address {
        &self.pickup
    }

    pub fn destination(&self) -> Option<&Address> {
        self.destination.as_ref()
    }

    pub fn driver(&self) -> Option<&Driver> {
        self.driver.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When `status` was last entered, if ever.
    pub fn entered_at(&self, status: OrderStatus) -> Option<DateTime<Utc>> {
        self.entered_at.get(&status).copied()
    }

    /// The timestamp of the current status.
    pub fn last_progress_time(&self) -> DomainResult<DateTime<Utc>> {
        self.entered_at.get(&self.status).copied().ok_or_else(|| {
            DomainError::unsupported(format!("no timestamp recorded for status {}", self.status))
        })
    }

    /// Destination can be changed at any point in the lifecycle.
    pub fn update_destination(&mut self, destination: Address) {
        debug!(order_id = %self.id, destination = %destination, "destination updated");
        self.destination = Some(destination);
        self.version += 1;
    }

    pub fn assign_driver(&mut self, driver: Driver, vehicle: Vehicle) -> DomainResult<()> {
        if self.driver.is_some() {
            return Err(self.reject("assign_driver", InvalidStateKind::DriverAlreadyAssigned));
        }

        self.driver = Some(driver.with_vehicle(vehicle));
        self.enter(OrderStatus::WaitingCarArrival, true);
        Ok(())
    }

    pub fn unassign_driver(&mut self) -> DomainResult<()> {
        if self.status.ride_started() {
            return Err(self.reject("unassign_driver", InvalidStateKind::RideAlreadyStarted));
        }
        if self.driver.is_none() {
            return Err(self.reject("unassign_driver", InvalidStateKind::NoDriverAssigned));
        }

        self.driver = None;
        // Back to waiting: last progress time falls back to the creation stamp.
        self.enter(OrderStatus::WaitingForDriver, false);
        Ok(())
    }

    pub fn cancel(&mut self) -> DomainResult<()> {
        if self.status.ride_started() {
            return Err(self.reject("cancel", InvalidStateKind::RideAlreadyStarted));
        }

        self.enter(OrderStatus::Canceled, true);
        Ok(())
    }

    /// Only an attached driver is required; prior status is not checked.
    pub fn start_ride(&mut self) -> DomainResult<()> {
        if self.driver.is_none() {
            return Err(self.reject("start_ride", InvalidStateKind::NoDriverAssigned));
        }

        self.enter(OrderStatus::InProgress, true);
        Ok(())
    }

    pub fn finish_ride(&mut self) -> DomainResult<()> {
        if self.driver.is_none() {
            return Err(self.reject("finish_ride", InvalidStateKind::NoDriverAssigned));
        }
        if self.status != OrderStatus::InProgress {
            return Err(self.reject("finish_ride", InvalidStateKind::RideNotInProgress));
        }

        self.enter(OrderStatus::Finished, true);
        Ok(())
    }

    /// `OrderId: .. Status: .. Client: .. Driver: .. From: .. To: .. LastProgressTime: ..`
    pub fn short_info(&self) -> DomainResult<String> {
        let last_progress = self.last_progress_time()?;
        let driver_name = self
            .driver
            .as_ref()
            .map(|d| d.name().to_string())
            .unwrap_or_default();
        let destination = self
            .destination
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();

        Ok([
            format!("OrderId: {}", self.id),
            format!("Status: {}", self.status),
            format!("Client: {}", self.client_name),
            format!("Driver: {driver_name}"),
            format!("From: {}", self.pickup),
            format!("To: {destination}"),
            format!("LastProgressTime: {}", last_progress.format(TIMESTAMP_FORMAT)),
        ]
        .join(" "))
    }

    /// `Id: .. DriverName: .. Color: .. CarModel: .. PlateNumber: ..`, or
    /// `None` while the order is waiting for a driver or has none attached.
    pub fn driver_full_info(&self) -> Option<String> {
        if self.status == OrderStatus::WaitingForDriver {
            return None;
        }
        let driver = self.driver.as_ref()?;
        let (color, model, plate) = driver
            .vehicle()
            .map(|v| (v.color(), v.model(), v.plate_number()))
            .unwrap_or_default();

        Some(
            [
                format!("Id: {}", driver.id_typed()),
                format!("DriverName: {}", driver.name()),
                format!("Color: {color}"),
                format!("CarModel: {model}"),
                format!("PlateNumber: {plate}"),
            ]
            .join(" "),
        )
    }

    pub fn snapshot(&self) -> DomainResult<OrderSnapshot> {
        Ok(OrderSnapshot {
            order_id: self.id,
            status: self.status,
            client_name: self.client_name.clone(),
            pickup: self.pickup.clone(),
            destination: self.destination.clone(),
            driver: self.driver.clone(),
            created_at: self.created_at,
            last_progress_time: self.last_progress_time()?,
            version: self.version,
        })
    }

    fn enter(&mut self, to: OrderStatus, stamp: bool) {
        let from = self.status;
        if stamp {
            self.entered_at.insert(to, self.clock.now());
        }
        self.status = to;
        self.version += 1;
        debug!(order_id = %self.id, ?from, ?to, version = self.version, "order status changed");
    }

    fn reject(&self, operation: &'static str, kind: InvalidStateKind) -> DomainError {
        warn!(order_id = %self.id, status = ?self.status, operation, reason = %kind, "transition rejected");
        DomainError::invalid_state(kind)
    }
}

impl Entity for TaxiOrder {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for TaxiOrder {
    fn version(&self) -> u64 {
        self.version
    }
}
