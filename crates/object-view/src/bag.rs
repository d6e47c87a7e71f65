//! A host backed by an ordered property store with a declared shape.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Index;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{ObjectViewError, PropertyError};
use crate::host::{Construct, Container, PropertyHost};
use crate::state;
use crate::value::{JsonProjectable, MapExportable, Nested, PropertyMap, PropertyValue};
use crate::view::ObjectView;

/// Declared, ordered property list of a [`PropertyBag`] type.
pub trait Shape: 'static {
    const PROPERTIES: &'static [&'static str];

    /// Values assigned when a bag is constructed.
    fn defaults(_container: Option<&dyn Container>) -> PropertyMap {
        PropertyMap::new()
    }
}

/// Property storage for a [`Shape`]. Only declared names can be assigned;
/// a declared name holds no value until it is assigned.
pub struct PropertyBag<S: Shape> {
    values: IndexMap<&'static str, PropertyValue>,
    shape: PhantomData<fn() -> S>,
}

impl<S: Shape> PropertyBag<S> {
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
            shape: PhantomData,
        }
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    /// Number of properties currently set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn declared(name: &str) -> Result<&'static str, PropertyError> {
        S::PROPERTIES
            .iter()
            .copied()
            .find(|declared| *declared == name)
            .ok_or_else(|| PropertyError::unknown(name))
    }
}

impl<S: Shape> PropertyHost for PropertyBag<S> {
    fn property_names(&self) -> &[&str] {
        S::PROPERTIES
    }

    fn get_property(&self, name: &str) -> Result<PropertyValue, PropertyError> {
        let name = Self::declared(name)?;
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| PropertyError::unset(name))
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        let name = Self::declared(name)?;
        self.values.insert(name, value);
        Ok(())
    }

    fn has_property(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    fn unset_property(&mut self, name: &str) -> Result<(), PropertyError> {
        let name = Self::declared(name)?;
        self.values.shift_remove(name);
        Ok(())
    }
}

impl<S: Shape> Construct for PropertyBag<S> {
    fn construct(container: Option<&dyn Container>) -> Result<Self, PropertyError> {
        let mut bag = Self::new();
        bag.populate(S::defaults(container))?;
        Ok(bag)
    }
}

impl<S: Shape> Nested for PropertyBag<S> {
    fn as_json_projectable(&self) -> Option<&dyn JsonProjectable> {
        Some(self)
    }

    fn as_map_exportable(&self) -> Option<&dyn MapExportable> {
        Some(self)
    }
}

impl<S: Shape> JsonProjectable for PropertyBag<S> {
    fn json_projection(&self) -> Result<Value, ObjectViewError> {
        self.to_json_value()
    }
}

impl<S: Shape> MapExportable for PropertyBag<S> {
    fn to_mapping(&self) -> Result<PropertyMap, PropertyError> {
        self.to_array()
    }
}

impl<S: Shape> Default for PropertyBag<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Shape> Clone for PropertyBag<S> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            shape: PhantomData,
        }
    }
}

impl<S: Shape> PartialEq for PropertyBag<S> {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

/// Renders [`ObjectView::to_display_string`]. A value that cannot be
/// encoded renders as `<unrepresentable: reason>`; use
/// `to_display_string` to receive the error itself.
impl<S: Shape> fmt::Display for PropertyBag<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_display_string() {
            Ok(text) => f.write_str(&text),
            Err(err) => write!(f, "<unrepresentable: {err}>"),
        }
    }
}

impl<S: Shape> fmt::Debug for PropertyBag<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.debug_snapshot() {
            Ok(snapshot) => f.debug_map().entries(snapshot.iter()).finish(),
            Err(err) => write!(f, "<unavailable: {err}>"),
        }
    }
}

impl<S: Shape> Index<&str> for PropertyBag<S> {
    type Output = PropertyValue;

    /// Panics when `name` is undeclared or unset.
    fn index(&self, name: &str) -> &PropertyValue {
        match self.values.get(name) {
            Some(value) => value,
            None => panic!("property `{name}` is unknown or unset"),
        }
    }
}

impl<S: Shape> Serialize for PropertyBag<S> {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> Result<Z::Ok, Z::Error> {
        state::serialize(self, serializer)
    }
}

impl<'de, S: Shape> Deserialize<'de> for PropertyBag<S> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        state::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Person;

    impl Shape for Person {
        const PROPERTIES: &'static [&'static str] = &["name", "age"];
    }

    struct Settings;

    impl Shape for Settings {
        const PROPERTIES: &'static [&'static str] = &["locale", "theme"];

        fn defaults(container: Option<&dyn Container>) -> PropertyMap {
            let mut defaults = PropertyMap::new();
            defaults.insert("theme".into(), "light".into());
            if let Some(locale) = container.and_then(|c| c.resolve("locale")) {
                defaults.insert("locale".into(), locale);
            }
            defaults
        }
    }

    #[test]
    fn rejects_undeclared_names() {
        let mut bag = PropertyBag::<Person>::new();
        assert!(matches!(
            bag.set_property("email", "x".into()),
            Err(PropertyError::Unknown { .. })
        ));
        assert!(matches!(bag.get_property("email"), Err(PropertyError::Unknown { .. })));
        assert!(matches!(bag.get_property("age"), Err(PropertyError::Unset { .. })));
        assert!(bag.is_empty());
    }

    #[test]
    fn export_follows_declared_order() {
        let mut bag = PropertyBag::<Person>::new();
        bag.set_property("age", 30.into()).unwrap();
        bag.set_property("name", "Ann".into()).unwrap();
        let keys: Vec<String> = bag.to_array().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["name", "age"]);
        assert_eq!(bag.to_string(), r#"{"name":"Ann","age":30}"#);
    }

    #[test]
    fn unset_removes_value() {
        let mut bag = PropertyBag::<Person>::new();
        bag.set_property("name", "Ann".into()).unwrap();
        bag.unset_property("name").unwrap();
        assert!(!bag.has_property("name"));
        assert_eq!(bag.len(), 0);
    }

    #[test]
    fn construct_applies_shape_defaults() {
        let bag = PropertyBag::<Settings>::construct(None).unwrap();
        assert_eq!(bag.to_json_value().unwrap(), json!({"theme": "light"}));

        let mut container = PropertyMap::new();
        container.insert("locale".into(), "fr".into());
        let bag = PropertyBag::<Settings>::create(PropertyMap::new(), Some(&container)).unwrap();
        assert_eq!(bag.to_json_value().unwrap(), json!({"locale": "fr", "theme": "light"}));
    }

    #[derive(Debug)]
    struct Opaque;

    impl Nested for Opaque {}

    #[test]
    fn display_falls_back_when_value_cannot_be_encoded() {
        let mut bag = PropertyBag::<Person>::new();
        bag.set_property("name", PropertyValue::object(Opaque)).unwrap();
        assert!(bag.to_display_string().is_err());
        let text = bag.to_string();
        assert!(text.starts_with("<unrepresentable: "), "got {text}");
        assert!(text.contains("Opaque"));
        assert_eq!(bag.to_array().unwrap().len(), 1);
    }

    #[test]
    fn debug_lists_set_properties() {
        let mut bag = PropertyBag::<Person>::new();
        bag.set_property("name", "Ann".into()).unwrap();
        assert_eq!(format!("{bag:?}"), r#"{"name": Json(String("Ann"))}"#);
    }

    #[test]
    fn index_reads_set_property() {
        let mut bag = PropertyBag::<Person>::new();
        bag.set_property("age", 41.into()).unwrap();
        assert_eq!(bag["age"], PropertyValue::from(41));
    }

    #[test]
    #[should_panic(expected = "property `name` is unknown or unset")]
    fn index_panics_on_unset() {
        let bag = PropertyBag::<Person>::new();
        let _ = &bag["name"];
    }
}
