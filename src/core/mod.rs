pub mod cascade;
pub mod decimal_math;
pub mod polar;
pub mod projection;
pub mod types;

pub use cascade::{first_defined, is_defined};
pub use decimal_math::{decimal_safe_add, decimal_safe_add_vectors};
pub use polar::PolarCoordinateSystem;
pub use projection::{PointList, project_point_list};
pub use types::{DataIndex, Indicator, Point};
