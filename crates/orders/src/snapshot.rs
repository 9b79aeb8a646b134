//! Serializable read model of a taxi order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use taxi_core::OrderId;

use crate::driver::Driver;
use crate::order::OrderStatus;
use crate::value::{Address, PersonName};

/// Point-in-time view of a [`crate::TaxiOrder`], detached from its clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub client_name: PersonName,
    pub pickup: Address,
    pub destination: Option<Address>,
    pub driver: Option<Driver>,
    pub created_at: DateTime<Utc>,
    pub last_progress_time: DateTime<Utc>,
    pub version: u64,
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::TimeZone;
    use serde_json::json;
    use taxi_core::{DriverId, FixedClock};

    use crate::{TaxiOrder, Vehicle};

    use super::*;

    #[test]
    fn snapshot_serializes_order_state() {
        let at = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
        let mut order = TaxiOrder::create(
            OrderId::new(3),
            PersonName::new("Anna", "Ivanova"),
            Address::new("Lenina", "10"),
            Arc::new(FixedClock::new(at)),
        );
        order
            .assign_driver(
                Driver::new(DriverId::new(15), PersonName::new("Drive", "Driverson")),
                Vehicle::new("Baklazhan", "Lada sedan", "A123BT 66"),
            )
            .unwrap();

        let value = serde_json::to_value(order.snapshot().unwrap()).unwrap();

        assert_eq!(value["order_id"], json!(3));
        assert_eq!(value["status"], json!("waiting_car_arrival"));
        assert_eq!(value["client_name"]["first_name"], json!("Anna"));
        assert_eq!(value["destination"], json!(null));
        assert_eq!(value["driver"]["id"], json!(15));
        assert_eq!(value["driver"]["vehicle"]["plate_number"], json!("A123BT 66"));
        assert_eq!(value["version"], json!(1));
    }
}
