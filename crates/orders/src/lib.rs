//! Taxi orders domain module.
//!
//! This crate contains the ride-request aggregate and its value objects,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).
//! Time enters only through the injected [`taxi_core::Clock`].

pub mod driver;
pub mod order;
pub mod snapshot;
pub mod value;

pub use driver::Driver;
pub use order::{OrderStatus, TIMESTAMP_FORMAT, TaxiOrder};
pub use snapshot::OrderSnapshot;
pub use value::{Address, PersonName, Vehicle};
