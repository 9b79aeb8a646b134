//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances holding the same field
/// values are equal and hash identically. Implementors derive `PartialEq`,
/// `Eq` and `Hash` so comparison is field-by-field and fixed at compile time.
///
/// Value objects are immutable. To "modify" one, build a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Address {
///     street: Option<String>,
///     building: Option<String>,
/// }
///
/// impl ValueObject for Address {}
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
