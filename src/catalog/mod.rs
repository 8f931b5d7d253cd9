//! Make/model reference data.
//!
//! The catalog is a JSON object mapping each make to its models:
//!
//! ```json
//! { "Ford": [ { "name": "F-150", "type": "Truck", "subtiers": ["Regular-Cab", "SuperCrew"] } ] }
//! ```
//!
//! Decoding is strict. Unknown record fields, duplicate makes, and blank
//! names are errors, so a broken data file fails loudly instead of turning
//! into an empty catalog.

pub mod error;
pub mod loader;
pub mod types;


pub use error::{CatalogError, CatalogResult};
pub use loader::{CatalogSource, FileCatalogSource, StaticCatalogSource, load_catalog};
pub use types::{Catalog, ModelRecord};
