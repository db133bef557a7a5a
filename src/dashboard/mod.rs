//! Dashboard page model.
//!
//! Turns a `FilterResult` into the sections a renderer draws: basic info, a
//! choropleth, demographics with an optional per-state bar chart, and the
//! descriptive text fields. Nothing here draws or fetches anything.

mod strings;
mod view;

pub use strings::{format_count, DashboardStrings};
pub use view::{
    BarChartSpec, BasicInfo, ChoroplethSpec, DashboardView, Demographics, Features, StatePoint,
};
