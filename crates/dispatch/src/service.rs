//! Order service facade.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{info, instrument};

use taxi_core::{Clock, DomainResult, DriverId, OrderId};
use taxi_orders::{Address, PersonName, TaxiOrder};

use crate::config::DispatchConfig;
use crate::directory::DriverDirectory;

/// Creates orders and forwards caller intents to them.
///
/// Holds nothing per order; the only shared state is the id counter, which
/// is atomic so concurrent `create_order` calls never hand out the same id.
pub struct OrderService<D> {
    directory: D,
    clock: Arc<dyn Clock>,
    next_id: AtomicU64,
}

impl<D> core::fmt::Debug for OrderService<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OrderService")
            .field("next_id", &self.next_id.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl<D: DriverDirectory> OrderService<D> {
    pub fn new(directory: D, clock: Arc<dyn Clock>) -> Self {
        Self::with_config(directory, clock, DispatchConfig::default())
    }

    pub fn with_config(directory: D, clock: Arc<dyn Clock>, config: DispatchConfig) -> Self {
        Self {
            directory,
            clock,
            next_id: AtomicU64::new(config.first_order_id),
        }
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Create an order waiting for a driver; the destination is set later.
    pub fn create_order(&self, client_name: PersonName, pickup: Address) -> TaxiOrder {
        let id = OrderId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        info!(order_id = %id, "creating taxi order");
        TaxiOrder::create(id, client_name, pickup, Arc::clone(&self.clock))
    }

    pub fn update_destination(&self, order: &mut TaxiOrder, destination: Address) {
        order.update_destination(destination);
    }

    /// Resolve the driver, then attach them. A directory miss fails the whole
    /// operation before the order is touched.
    #[instrument(level = "debug", skip(self, order), fields(order_id = %order.id_typed()))]
    pub fn assign_driver(&self, order: &mut TaxiOrder, driver_id: DriverId) -> DomainResult<()> {
        let record = self.directory.find(driver_id)?;
        order.assign_driver(record.driver, record.vehicle)?;
        info!(order_id = %order.id_typed(), driver_id = %driver_id, "driver assigned");
        Ok(())
    }

    pub fn unassign_driver(&self, order: &mut TaxiOrder) -> DomainResult<()> {
        order.unassign_driver()
    }

    pub fn cancel(&self, order: &mut TaxiOrder) -> DomainResult<()> {
        order.cancel()
    }

    pub fn start_ride(&self, order: &mut TaxiOrder) -> DomainResult<()> {
        order.start_ride()
    }

    pub fn finish_ride(&self, order: &mut TaxiOrder) -> DomainResult<()> {
        order.finish_ride()
    }

    /// Driver, car and plate summary; `None` until a driver is assigned.
    pub fn driver_full_info(&self, order: &TaxiOrder) -> Option<String> {
        order.driver_full_info()
    }

    pub fn short_order_info(&self, order: &TaxiOrder) -> DomainResult<String> {
        order.short_info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::InMemoryDriverDirectory;
    use chrono::{TimeZone, Utc};
    use taxi_core::{DomainError, FixedClock};
    use taxi_orders::OrderStatus;

    fn test_service() -> OrderService<InMemoryDriverDirectory> {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap());
        OrderService::new(InMemoryDriverDirectory::seeded(), Arc::new(clock))
    }

    fn test_order(service: &OrderService<InMemoryDriverDirectory>) -> TaxiOrder {
        service.create_order(PersonName::new("Anna", "Ivanova"), Address::new("Lenina", "10"))
    }

    #[test]
    fn ids_are_sequential_from_zero() {
        let service = test_service();
        let ids: Vec<_> = (0..3).map(|_| test_order(&service).id_typed()).collect();
        assert_eq!(ids, vec![OrderId::new(0), OrderId::new(1), OrderId::new(2)]);
    }

    #[test]
    fn ids_start_from_configured_value() {
        let clock = Arc::new(FixedClock::new(Utc::now()));
        let service = OrderService::with_config(
            InMemoryDriverDirectory::new(),
            clock,
            DispatchConfig { first_order_id: 500 },
        );
        assert_eq!(test_order(&service).id_typed(), OrderId::new(500));
        assert_eq!(test_order(&service).id_typed(), OrderId::new(501));
    }

    #[test]
    fn unknown_driver_leaves_order_untouched() {
        let service = test_service();
        let mut order = test_order(&service);

        let err = service.assign_driver(&mut order, DriverId::new(99)).unwrap_err();

        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(order.status(), OrderStatus::WaitingForDriver);
        assert!(order.driver().is_none());
        assert_eq!(taxi_core::AggregateRoot::version(&order), 0);
    }

    #[test]
    fn concurrent_creation_never_reuses_ids() {
        let service = Arc::new(test_service());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let service = Arc::clone(&service);
                std::thread::spawn(move || {
                    (0..250)
                        .map(|_| test_order(&service).id_typed())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<_> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 1000);
    }
}
