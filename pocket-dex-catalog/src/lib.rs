//! Generic catalog engine: records decoded from tabular rows, an immutable
//! store keyed by identifier, and sortable/filterable views over it.
//!
//! The engine knows nothing about any particular catalog. A [`Schema`]
//! describes the columns of one kind, and a closed [`FieldKey`] enum with an
//! [`ExtractorRegistry`] describes what a view can sort and filter on.

pub mod catalog;
pub mod criterion;
pub mod decode;
pub mod error;
pub mod extract;
pub mod id;
pub mod record;
pub mod schema;
pub mod source;
pub mod store;
pub mod value;
pub mod view;
pub mod yaml;

pub use catalog::Catalog;
pub use criterion::Criterion;
pub use error::{CatalogError, CatalogResult};
pub use extract::{Extractor, ExtractorRegistry, FieldKey};
pub use id::EntryId;
pub use record::{RawRow, Record};
pub use schema::{FieldKind, FieldSpec, ScalarKind, Schema};
pub use source::{CatalogSource, read_rows, rows_from_str};
pub use store::Store;
pub use value::{FieldValue, Mapping};
pub use view::{View, ViewState};
pub use yaml::{load_schema, load_schema_override};
