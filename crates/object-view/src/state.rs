//! Serde integration through the serialization pair.
//!
//! Hosts serialize as their [`ObjectView::serialize_state`] mapping and
//! deserialize by constructing an empty host and calling
//! [`ObjectView::restore_state`]. Use the free functions with
//! `#[serde(with = "object_view::state")]` on fields of any host type.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::host::Construct;
use crate::value::{project, PropertyMap, PropertyValue};
use crate::view::ObjectView;

pub fn serialize<T, S>(host: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: ObjectView,
    S: Serializer,
{
    let state = host.serialize_state().map_err(S::Error::custom)?;
    state.serialize(serializer)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: ObjectView + Construct,
    D: Deserializer<'de>,
{
    let state = PropertyMap::deserialize(deserializer)?;
    let mut host = T::construct(None).map_err(D::Error::custom)?;
    host.restore_state(state).map_err(D::Error::custom)?;
    Ok(host)
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Json(value) => value.serialize(serializer),
            Self::Object(_) => project(self)
                .map_err(S::Error::custom)?
                .serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::Json)
    }
}
