//! Reference collaborators for hosts without their own legend or polar component.
//!
//! Production embeddings usually implement `Legend` and
//! `PolarCoordinateSystem` on top of their own UI state instead.

pub mod legend;
pub mod polar;

pub use legend::{LegendEntry, StaticLegend};
pub use polar::{PolarInstance, StaticPolar};
