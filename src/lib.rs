//! Bhasha Kosha: a browsable table of facts about Indian languages.
//!
//! - `catalog`: the immutable language table and its load-time validation
//! - `filter`: language + state selection and speaker aggregation
//! - `dashboard`: the page model handed to whatever draws the widgets
//! - `server`: HTTP routes over the dashboard

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod server;

pub use catalog::{Catalog, CatalogError, LanguageRecord};
pub use filter::{filter, FilterError, FilterResult};
