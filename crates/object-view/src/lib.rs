//! object-view - DTO behavior for property-bearing objects.
//!
//! Any type implementing [`PropertyHost`] gets [`ObjectView`]: bulk
//! population from a mapping or JSON, export to an ordered mapping or JSON,
//! indexed access, and a serialization pair that drops top-level nulls.
//!
//! Nested objects participate through [`Nested`], which exposes the
//! [`JsonProjectable`] and [`MapExportable`] capabilities. JSON projection
//! takes precedence over mapping export.
//!
//! [`PropertyBag`] is a ready-made host over a declared [`Shape`]:
//!
//! ```
//! use object_view::{ObjectView, PropertyBag, PropertyMap, Shape};
//! use object_view::EncodeOptions;
//!
//! struct Person;
//!
//! impl Shape for Person {
//!     const PROPERTIES: &'static [&'static str] = &["name", "age"];
//! }
//!
//! let mut initial = PropertyMap::new();
//! initial.insert("name".into(), "Ann".into());
//! let person = PropertyBag::<Person>::create(initial, None).unwrap();
//! assert_eq!(person.to_json(EncodeOptions::default()).unwrap(), r#"{"name":"Ann"}"#);
//! ```

mod bag;
mod error;
mod host;
pub mod state;
mod value;
mod view;

pub use bag::{PropertyBag, Shape};
pub use error::{ObjectViewError, PropertyError};
pub use host::{Construct, Container, PropertyHost};
pub use value::{
    from_json_map, project, project_map, project_object, JsonProjectable, MapExportable, Nested,
    PropertyMap, PropertyValue, MAX_NESTING,
};
pub use view::ObjectView;

pub use object_view_json::{DecodeError, EncodeError, EncodeOptions};
