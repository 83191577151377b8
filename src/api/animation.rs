use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{Point, PolarCoordinateSystem};
use crate::render::{ShapeGeometry, ShapeRecord};

use super::RadarOption;

/// Scale a polygon starts from before growing to full size.
pub const ENTRANCE_START_SCALE: f64 = 0.1;
/// Start offset added per data index so polygons enter one after another.
pub const STAGGER_DELAY_MS: u32 = 100;

/// Named easing curves accepted by `animationEasing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    QuadraticIn,
    QuadraticOut,
    QuadraticInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuarticIn,
    QuarticOut,
    QuarticInOut,
    QuinticIn,
    QuinticOut,
    QuinticInOut,
    SinusoidalIn,
    SinusoidalOut,
    SinusoidalInOut,
    ExponentialIn,
    #[default]
    ExponentialOut,
    ExponentialInOut,
    CircularIn,
    CircularOut,
    CircularInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    BackIn,
    BackOut,
    BackInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
}

const BACK_OVERSHOOT: f64 = 1.70158;
const ELASTIC_PERIOD: f64 = 0.4;

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the curve.
    ///
    /// Input is clamped; elastic and back curves may overshoot in the output.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let k = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => k,
            Self::QuadraticIn => k * k,
            Self::QuadraticOut => k * (2.0 - k),
            Self::QuadraticInOut => in_out(k, |k| k * k),
            Self::CubicIn => k.powi(3),
            Self::CubicOut => (k - 1.0).powi(3) + 1.0,
            Self::CubicInOut => in_out(k, |k| k.powi(3)),
            Self::QuarticIn => k.powi(4),
            Self::QuarticOut => 1.0 - (k - 1.0).powi(4),
            Self::QuarticInOut => in_out(k, |k| k.powi(4)),
            Self::QuinticIn => k.powi(5),
            Self::QuinticOut => (k - 1.0).powi(5) + 1.0,
            Self::QuinticInOut => in_out(k, |k| k.powi(5)),
            Self::SinusoidalIn => 1.0 - (k * PI / 2.0).cos(),
            Self::SinusoidalOut => (k * PI / 2.0).sin(),
            Self::SinusoidalInOut => 0.5 * (1.0 - (PI * k).cos()),
            Self::ExponentialIn => exponential_in(k),
            Self::ExponentialOut => 1.0 - exponential_in(1.0 - k),
            Self::ExponentialInOut => in_out(k, exponential_in),
            Self::CircularIn => circular_in(k),
            Self::CircularOut => 1.0 - circular_in(1.0 - k),
            Self::CircularInOut => in_out(k, circular_in),
            Self::ElasticIn => elastic_in(k),
            Self::ElasticOut => 1.0 - elastic_in(1.0 - k),
            Self::ElasticInOut => in_out(k, elastic_in),
            Self::BackIn => back_in(k, BACK_OVERSHOOT),
            Self::BackOut => 1.0 - back_in(1.0 - k, BACK_OVERSHOOT),
            Self::BackInOut => in_out(k, |k| back_in(k, BACK_OVERSHOOT * 1.525)),
            Self::BounceIn => 1.0 - bounce_out(1.0 - k),
            Self::BounceOut => bounce_out(k),
            Self::BounceInOut => {
                if k < 0.5 {
                    0.5 * (1.0 - bounce_out(1.0 - 2.0 * k))
                } else {
                    0.5 * bounce_out(2.0 * k - 1.0) + 0.5
                }
            }
        }
    }
}

/// Mirrors an ease-in curve into a symmetric ease-in-out curve.
fn in_out(k: f64, ease_in: impl Fn(f64) -> f64) -> f64 {
    if k < 0.5 {
        0.5 * ease_in(2.0 * k)
    } else {
        1.0 - 0.5 * ease_in(2.0 - 2.0 * k)
    }
}

fn exponential_in(k: f64) -> f64 {
    if k <= 0.0 {
        0.0
    } else {
        1024f64.powf(k - 1.0)
    }
}

fn circular_in(k: f64) -> f64 {
    1.0 - (1.0 - k * k).max(0.0).sqrt()
}

fn elastic_in(k: f64) -> f64 {
    if k <= 0.0 {
        return 0.0;
    }
    if k >= 1.0 {
        return 1.0;
    }
    let shift = ELASTIC_PERIOD / 4.0;
    -(2f64.powf(10.0 * (k - 1.0)) * ((k - 1.0 - shift) * 2.0 * PI / ELASTIC_PERIOD).sin())
}

fn back_in(k: f64, overshoot: f64) -> f64 {
    k * k * ((overshoot + 1.0) * k - overshoot)
}

fn bounce_out(k: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;
    if k < 1.0 / D {
        N * k * k
    } else if k < 2.0 / D {
        let k = k - 1.5 / D;
        N * k * k + 0.75
    } else if k < 2.5 / D {
        let k = k - 2.25 / D;
        N * k * k + 0.9375
    } else {
        let k = k - 2.625 / D;
        N * k * k + 0.984375
    }
}

/// Entrance animation for one polygon: scale about the polar center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationTask {
    /// Position of the animated shape in the built shape list.
    pub shape_index: usize,
    pub series_index: usize,
    pub data_index: usize,
    pub center: Point,
    /// Applied immediately, before the first frame.
    pub from_scale: f64,
    pub to_scale: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl AnimationTask {
    #[must_use]
    pub fn end_ms(&self) -> u32 {
        self.delay_ms.saturating_add(self.duration_ms)
    }

    /// Uniform scale factor `elapsed_ms` after the task was started.
    #[must_use]
    pub fn scale_at(&self, elapsed_ms: f64) -> f64 {
        let since_start = elapsed_ms - f64::from(self.delay_ms);
        if since_start <= 0.0 {
            return self.from_scale;
        }
        if since_start >= f64::from(self.duration_ms) {
            return self.to_scale;
        }
        let progress = self.easing.apply(since_start / f64::from(self.duration_ms));
        self.from_scale + (self.to_scale - self.from_scale) * progress
    }
}

/// Plans the staggered grow-in animation for every polygon in `shapes`.
///
/// Duration and easing fall back from the series to the global option; delay
/// grows by `STAGGER_DELAY_MS` per data index. Polygons whose polar center
/// cannot be resolved are left unanimated.
pub fn plan_entrance_animation(
    shapes: &[ShapeRecord],
    option: &RadarOption,
    polar: &dyn PolarCoordinateSystem,
) -> Vec<AnimationTask> {
    if !option.animation {
        return Vec::new();
    }

    let mut tasks = Vec::new();
    for (shape_index, shape) in shapes.iter().enumerate() {
        if !matches!(shape.geometry, ShapeGeometry::Polygon(_)) {
            continue;
        }
        let Some(data_index) = shape.meta.data_index.item() else {
            continue;
        };
        let series_index = shape.meta.series_index;
        let Some(series) = option.series.get(series_index) else {
            warn!(series_index, "polygon references unknown series, skipping animation");
            continue;
        };
        let polar_index = series
            .polar_index
            .unwrap_or(option.series_defaults.polar_index);
        let Some(center) = polar.center(polar_index) else {
            warn!(polar_index, "polar center unavailable, skipping animation");
            continue;
        };

        let delay_ms = u32::try_from(data_index)
            .unwrap_or(u32::MAX)
            .saturating_mul(STAGGER_DELAY_MS);
        let task = AnimationTask {
            shape_index,
            series_index,
            data_index,
            center,
            from_scale: ENTRANCE_START_SCALE,
            to_scale: 1.0,
            duration_ms: series
                .animation_duration
                .unwrap_or(option.animation_duration),
            delay_ms,
            easing: series.animation_easing.unwrap_or(option.animation_easing),
        };
        trace!(
            shape_index,
            series_index,
            data_index,
            delay_ms,
            "planned polygon entrance"
        );
        tasks.push(task);
    }
    tasks
}
