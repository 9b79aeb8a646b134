//! Aggregate root trait for domain models mutated through guarded transitions.

use crate::entity::Entity;

/// Aggregate root marker + minimal interface.
///
/// An aggregate is the consistency boundary: every invariant of the model is
/// enforced by its own operations, and callers never reach inside to mutate
/// nested state directly.
pub trait AggregateRoot: Entity {
    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Incremented once per successfully applied operation. A rejected
    /// operation leaves the version untouched.
    fn version(&self) -> u64;
}
