//! Bulk conversion, JSON and indexed access over a [`PropertyHost`].

use object_view_json::{decode_map, encode, EncodeOptions};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{ObjectViewError, PropertyError};
use crate::host::{Construct, Container, PropertyHost};
use crate::value::{from_json_map, project_map, PropertyMap, PropertyValue};

/// DTO behavior available on every [`PropertyHost`].
///
/// All operations are stateless passes over the host's current property
/// set. Reads and writes always go through the host accessors, and host
/// errors are returned unchanged.
pub trait ObjectView: PropertyHost {
    /// Assigns every entry of `data` in iteration order. Properties absent
    /// from `data` keep their current value.
    ///
    /// Stops at the first rejected entry; earlier entries stay applied.
    fn populate<I, K>(&mut self, data: I) -> Result<(), PropertyError>
    where
        I: IntoIterator<Item = (K, PropertyValue)>,
        K: AsRef<str>,
    {
        for (name, value) in data {
            let name = name.as_ref();
            trace!(property = name, "populate");
            self.set_property(name, value)?;
        }
        Ok(())
    }

    /// Constructs a host through [`Construct`] and populates it with
    /// `initial`.
    fn create(
        initial: PropertyMap,
        container: Option<&dyn Container>,
    ) -> Result<Self, PropertyError>
    where
        Self: Construct,
    {
        let mut host = Self::construct(container)?;
        host.populate(initial)?;
        Ok(host)
    }

    /// Decodes a JSON object and creates a host from it.
    fn from_json(text: &str) -> Result<Self, ObjectViewError>
    where
        Self: Construct,
    {
        let map = decode_map(text).map_err(|err| {
            debug!(error = %err, "from_json: decode failed");
            err
        })?;
        Ok(Self::create(from_json_map(map), None)?)
    }

    /// Snapshot of every set property, in declared order.
    fn to_array(&self) -> Result<PropertyMap, PropertyError> {
        let names = self.property_names();
        let mut out = PropertyMap::with_capacity(names.len());
        for &name in names {
            if self.is_property_unset(name) {
                continue;
            }
            out.insert(name.to_string(), self.get_property(name)?);
        }
        Ok(out)
    }

    /// JSON-safe projection of [`ObjectView::to_array`], with nested
    /// objects projected recursively.
    fn to_json_value(&self) -> Result<Value, ObjectViewError> {
        project_map(&self.to_array()?)
    }

    fn to_json(&self, options: EncodeOptions) -> Result<String, ObjectViewError> {
        let value = self.to_json_value()?;
        let text = encode(&value, options).map_err(|err| {
            debug!(error = %err, "to_json: encode failed");
            err
        })?;
        Ok(text)
    }

    /// Like [`ObjectView::to_array`] without top-level `null` entries.
    ///
    /// Nulls inside nested values are kept.
    fn serialize_state(&self) -> Result<PropertyMap, PropertyError> {
        let mut state = self.to_array()?;
        state.retain(|_, value| !value.is_null());
        Ok(state)
    }

    fn restore_state(&mut self, data: PropertyMap) -> Result<(), PropertyError> {
        self.populate(data)
    }

    fn to_display_string(&self) -> Result<String, ObjectViewError> {
        self.to_json(EncodeOptions::default())
    }

    fn debug_snapshot(&self) -> Result<PropertyMap, PropertyError> {
        self.to_array()
    }

    fn offset_exists(&self, name: &str) -> bool {
        self.has_property(name)
    }

    fn offset_get(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        self.get_property(name)
    }

    fn offset_set(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        self.set_property(name, value)
    }

    fn offset_unset(&mut self, name: &str) -> Result<(), PropertyError> {
        self.unset_property(name)
    }

    /// True when storage holds no value for `name`. An assigned `null`
    /// counts as set.
    fn is_property_unset(&self, name: &str) -> bool {
        !self.has_property(name)
    }
}

impl<T: PropertyHost> ObjectView for T {}
