//! Capabilities a host object exposes to its object view.

use crate::error::PropertyError;
use crate::value::{PropertyMap, PropertyValue};

/// Named-property accessors over a fixed, ordered property set.
///
/// A property is *set* when the host's storage currently holds a value for
/// it, which includes an explicit `null`. `has_property` reports exactly
/// that; declared-but-unassigned properties answer `false`.
pub trait PropertyHost {
    /// The populatable properties, in export order.
    fn property_names(&self) -> &[&str];

    fn get_property(&self, name: &str) -> Result<PropertyValue, PropertyError>;

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError>;

    fn has_property(&self, name: &str) -> bool;

    /// Clears a property so that `has_property` reports `false`.
    fn unset_property(&mut self, name: &str) -> Result<(), PropertyError>;
}

/// Builds an empty host, optionally consulting a container.
pub trait Construct: Sized {
    fn construct(container: Option<&dyn Container>) -> Result<Self, PropertyError>;
}

/// External factory handle consulted at construction time.
pub trait Container {
    fn resolve(&self, id: &str) -> Option<PropertyValue>;
}

impl Container for PropertyMap {
    fn resolve(&self, id: &str) -> Option<PropertyValue> {
        self.get(id).cloned()
    }
}
