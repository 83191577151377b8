use std::f64::consts::{FRAC_PI_2, TAU};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Indicator, Point, PolarCoordinateSystem};

/// Fixed geometry for one polar instance: spokes spread evenly, clockwise
/// from `start_angle_rad` (straight up by default).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolarInstance {
    pub center: Point,
    pub radius: f64,
    pub indicators: Vec<Indicator>,
    #[serde(default = "default_start_angle")]
    pub start_angle_rad: f64,
}

impl PolarInstance {
    #[must_use]
    pub fn new(center: Point, radius: f64, indicators: Vec<Indicator>) -> Self {
        Self {
            center,
            radius,
            indicators,
            start_angle_rad: default_start_angle(),
        }
    }

    fn spoke_point(&self, axis_index: usize, distance: f64) -> Point {
        let step = TAU / self.indicators.len() as f64;
        let angle = self.start_angle_rad - axis_index as f64 * step;
        Point::new(
            self.center.x + distance * angle.cos(),
            self.center.y - distance * angle.sin(),
        )
    }
}

/// Polar provider with precomputed instances, for headless use and tests.
///
/// Values map linearly from `[min, max]` of their indicator onto `[0, radius]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticPolar {
    instances: IndexMap<usize, PolarInstance>,
}

impl StaticPolar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_instance(mut self, polar_index: usize, instance: PolarInstance) -> Self {
        self.instances.insert(polar_index, instance);
        self
    }

    #[must_use]
    pub fn instance(&self, polar_index: usize) -> Option<&PolarInstance> {
        self.instances.get(&polar_index)
    }
}

impl PolarCoordinateSystem for StaticPolar {
    fn vector(&self, polar_index: usize, axis_index: usize, value: f64) -> Option<Point> {
        let instance = self.instances.get(&polar_index)?;
        let indicator = instance.indicators.get(axis_index)?;
        let span = indicator.max - indicator.min;
        if !value.is_finite() || !span.is_finite() || span <= 0.0 {
            return None;
        }
        let distance = (value - indicator.min) / span * instance.radius;
        Some(instance.spoke_point(axis_index, distance))
    }

    fn center(&self, polar_index: usize) -> Option<Point> {
        self.instances.get(&polar_index).map(|instance| instance.center)
    }

    fn indicators(&self, polar_index: usize) -> Vec<Indicator> {
        self.instances
            .get(&polar_index)
            .map(|instance| instance.indicators.clone())
            .unwrap_or_default()
    }

    fn drop_box(&self, polar_index: usize) -> Option<Vec<Point>> {
        let instance = self.instances.get(&polar_index)?;
        if instance.indicators.is_empty() {
            return None;
        }
        Some(
            (0..instance.indicators.len())
                .map(|axis_index| instance.spoke_point(axis_index, instance.radius))
                .collect(),
        )
    }
}

fn default_start_angle() -> f64 {
    FRAC_PI_2
}
