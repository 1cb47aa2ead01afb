//! Dataset layer: loading the immutable catalog.
//!
//! # Modules
//!
//! - `source`: The [`CatalogSource`] trait
//! - `json`: JSON file and embedded sample implementations
//! - `models`: On-disk record types, separate from domain models

pub mod json;
pub mod models;
pub mod source;

pub use json::{parse_catalog, EmbeddedCatalog, JsonCatalog};
pub use models::{BookRecord, DatasetFile};
pub use source::CatalogSource;
