//! `ue-geojson` — everything between domain records and map sources.
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`validate`]  | Coordinate / geometry / feature validity checks           |
//! | [`sanitize`]  | Property default table and numeric coercion               |
//! | [`convert`]   | `to_valid_geojson` — arbitrary JSON → valid collection    |
//! | [`build`]     | `ToFeature`, point / line builders, coordinate accessors  |
//!
//! # Guarantee
//!
//! [`to_valid_geojson`] never fails.  Whatever the input, the output is a
//! structurally valid `FeatureCollection` (possibly empty) whose features
//! all pass [`validate_feature`], and running it again on its own output
//! yields the same collection.

pub mod build;
pub mod convert;
pub mod sanitize;
pub mod validate;


pub use build::{
    collection, empty_collection, line_coordinates, line_feature, point_coordinates,
    point_feature, properties, to_collection, with_id, ToFeature,
};
pub use convert::{to_valid_geojson, GeometryType};
pub use sanitize::{default_for, sanitize_properties, NUMERIC_PROPERTIES};
pub use validate::{validate_coordinates, validate_feature, validate_line_string};

// Re-exported so downstream crates share one `geojson` version.
pub use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};
