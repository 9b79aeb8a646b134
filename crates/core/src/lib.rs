//! `taxi-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod aggregate;
pub mod clock;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use clock::{Clock, FixedClock, ManualClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult, InvalidStateKind};
pub use id::{DriverId, OrderId};
pub use value_object::ValueObject;
