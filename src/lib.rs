//! radar-chart-rs: radar (multi-axis polygon) series for chart engines.
//!
//! The crate turns radar series options into a flat, renderer-agnostic shape
//! list and applies drag-based data edits. Legend UI, polar axis layout and
//! drawing stay with the host behind narrow traits.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{RadarChart, RadarOption, RadarSeriesBuilder};
pub use error::{ChartError, ChartResult};
