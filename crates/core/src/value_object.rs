//! Value object trait: equality by value, not identity.

/// Marker trait for immutable domain values compared by their attributes.
///
/// `Money { minor: 21000 }` is a value object; a `Product` with a
/// `ProductId` is an entity. Value objects never change in place — "modify"
/// means constructing a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
