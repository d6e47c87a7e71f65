//! Property values and the capabilities nested objects may expose.

use std::cell::Cell;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use object_view_json::EncodeError;
use serde_json::{Map, Number, Value};

use crate::error::{ObjectViewError, PropertyError};

/// Insertion-ordered mapping from property name to value.
pub type PropertyMap = IndexMap<String, PropertyValue>;

/// A value held by a host property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// Null, primitives, arrays and plain JSON objects.
    Json(Value),
    /// A nested object, exported through whichever capability it exposes.
    Object(Arc<dyn Nested>),
}

impl PropertyValue {
    pub fn object(value: impl Nested + 'static) -> Self {
        Self::Object(Arc::new(value))
    }

    /// True only for an explicitly held JSON `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Json(Value::Null))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Object(_) => None,
        }
    }

    pub fn as_object(&self) -> Option<&Arc<dyn Nested>> {
        match self {
            Self::Json(_) => None,
            Self::Object(object) => Some(object),
        }
    }
}

impl Default for PropertyValue {
    fn default() -> Self {
        Self::Json(Value::Null)
    }
}

/// JSON values compare structurally, nested objects by identity.
impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Json(a), Self::Json(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<Arc<dyn Nested>> for PropertyValue {
    fn from(object: Arc<dyn Nested>) -> Self {
        Self::Object(object)
    }
}

macro_rules! json_scalar_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for PropertyValue {
                fn from(value: $ty) -> Self {
                    Self::Json(Value::from(value))
                }
            }
        )*
    };
}

json_scalar_from!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, String, &str);

/// NaN and infinities are rejected rather than stored as `null`.
impl TryFrom<f64> for PropertyValue {
    type Error = EncodeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Number::from_f64(value)
            .map(|number| Self::Json(Value::Number(number)))
            .ok_or(EncodeError::NonFinite(value))
    }
}

impl TryFrom<f32> for PropertyValue {
    type Error = EncodeError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::try_from(f64::from(value))
    }
}

/// Capability discovery for nested objects.
///
/// Exporters ask for [`JsonProjectable`] first and fall back to
/// [`MapExportable`]; an object exposing neither cannot be encoded.
pub trait Nested: fmt::Debug + Send + Sync {
    fn as_json_projectable(&self) -> Option<&dyn JsonProjectable> {
        None
    }

    fn as_map_exportable(&self) -> Option<&dyn MapExportable> {
        None
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Produces a JSON-safe projection of the object.
pub trait JsonProjectable {
    fn json_projection(&self) -> Result<Value, ObjectViewError>;
}

/// Exports the object as a plain property mapping.
pub trait MapExportable {
    fn to_mapping(&self) -> Result<PropertyMap, PropertyError>;
}

/// Projects one property value to JSON.
pub fn project(value: &PropertyValue) -> Result<Value, ObjectViewError> {
    match value {
        PropertyValue::Json(json) => Ok(json.clone()),
        PropertyValue::Object(object) => project_object(object.as_ref()),
    }
}

/// Deepest chain of nested objects a single projection may walk.
pub const MAX_NESTING: usize = 128;

thread_local! {
    static NESTING: Cell<usize> = const { Cell::new(0) };
}

/// Counts one level of nested-object projection on this thread.
struct NestingGuard;

impl NestingGuard {
    fn enter() -> Result<Self, EncodeError> {
        NESTING.with(|depth| {
            let current = depth.get();
            if current >= MAX_NESTING {
                return Err(EncodeError::DepthExceeded { limit: MAX_NESTING });
            }
            depth.set(current + 1);
            Ok(NestingGuard)
        })
    }
}

impl Drop for NestingGuard {
    fn drop(&mut self) {
        NESTING.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Projects a nested object, preferring its JSON projection over its
/// mapping export.
///
/// Fails with [`EncodeError::DepthExceeded`] once more than [`MAX_NESTING`]
/// nested objects are being projected at once, which is how a cyclic value
/// surfaces.
pub fn project_object(object: &dyn Nested) -> Result<Value, ObjectViewError> {
    let _guard = NestingGuard::enter()?;
    if let Some(projectable) = object.as_json_projectable() {
        return projectable.json_projection();
    }
    if let Some(exportable) = object.as_map_exportable() {
        return project_map(&exportable.to_mapping()?);
    }
    Err(EncodeError::Unrepresentable {
        type_name: object.type_name().to_string(),
    }
    .into())
}

/// Projects every entry of `map`, keeping its order.
pub fn project_map(map: &PropertyMap) -> Result<Value, ObjectViewError> {
    let mut out = Map::with_capacity(map.len());
    for (name, value) in map {
        out.insert(name.clone(), project(value)?);
    }
    Ok(Value::Object(out))
}

/// Lifts a decoded JSON object into a property mapping.
pub fn from_json_map(map: Map<String, Value>) -> PropertyMap {
    map.into_iter()
        .map(|(name, value)| (name, PropertyValue::Json(value)))
        .collect()
}
