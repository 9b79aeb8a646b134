//! Application-level orchestration for taxi orders.
//!
//! The [`OrderService`] hands out order ids, resolves drivers through a
//! [`DriverDirectory`] and forwards each intent to the [`taxi_orders::TaxiOrder`]
//! aggregate, which owns every invariant. Orders themselves are held by the
//! caller; the service keeps no per-order state.

pub mod config;
pub mod directory;
pub mod service;

pub use config::DispatchConfig;
pub use directory::{DriverDirectory, DriverRecord, InMemoryDriverDirectory};
pub use service::OrderService;
