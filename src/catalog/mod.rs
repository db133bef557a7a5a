//! Language catalog: the immutable table every query runs against.
//!
//! # Architecture
//!
//! - `record`: `LanguageRecord` and the on-disk entry format it is normalized from
//! - `registry`: `Catalog`, the loaded table plus the embedded built-in singleton
//! - `validator`: load-time checks on uniqueness, state lists and speaker figures
//!
//! # Example
//!
//! ```rust,ignore
//! use bhasha_kosha::Catalog;
//!
//! let catalog = Catalog::builtin();
//! let tamil = catalog.get("Tamil").expect("built-in language");
//! assert_eq!(tamil.family, "Dravidian");
//! ```

mod record;
mod registry;
mod validator;

pub use record::LanguageRecord;
pub use registry::{Catalog, CatalogError};
pub use validator::{CatalogValidator, ValidationReport};
