//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are domain objects that are **immutable** and **compared by value**.
/// They represent concepts where identity doesn't matter - only the values matter.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `Price(34999)` is a value object
/// - `Product { id: ProductId(1), name: "..." }` is an entity
///
/// To "modify" a value object, create a new one with the new values. The trait
/// requires `Clone` (values are cheap to copy), `PartialEq` (compared by
/// attribute values), and `Debug` (helpful for logging, testing).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
