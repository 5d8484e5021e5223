//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// - **Value Object**: `Money::from_cents(150)`, a day's sales record
/// - **Entity**: a `MenuItem`, keyed by its name inside a stand's catalog
///
/// ```
/// use stand_core::{Money, ValueObject};
///
/// fn assert_value_object<T: ValueObject>(_: &T) {}
///
/// let price = Money::from_cents(150);
/// assert_value_object(&price);
/// assert_eq!(price, Money::from_cents(150));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
