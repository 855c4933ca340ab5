//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A ticket request
/// for two adults is the same as any other ticket request for two adults; an
/// account, by contrast, is identified by its [`AccountId`](crate::AccountId).
///
/// To "modify" a value object, create a new one with the new values.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Seats(u64);
///
/// impl ValueObject for Seats {}
///
/// assert_eq!(Seats(2), Seats(2)); // Equal by value, not identity
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
