//! Product import ingestion: attribute catalogs, product CSV files, column
//! descriptors and record building.

pub mod builder;
pub mod catalog;
pub mod columns;
pub mod error;
pub mod reader;

pub use builder::{build_product, convert};
pub use catalog::{AttributeCatalog, load_attributes, parse_attributes};
pub use columns::{PROPERTY_COLUMNS, parse_column, parse_columns};
pub use error::{IngestError, Result};
pub use reader::{ProductFile, parse_products, read_products};
