//! `tracing` setup for hosts of `radar-chart-rs`.
//!
//! Events emitted by the crate:
//! - `debug`: end of a build pass (`shape_count`, `drop_boxes`, `rendered_items`),
//!   drop-box registration (`polar_index`, `series_index`), chart rebuilds, and
//!   each drag edit (`series_index`, `data_index`, `name`).
//! - `trace`: every built polygon (`vertices`, `symbol_counter`), series hidden by
//!   the legend, planned entrance animations (`shape_index`, `delay_ms`) and
//!   legend entry changes in `StaticLegend`.
//! - `warn`: drops without a dragged shape and polygons whose polar center or
//!   series cannot be resolved for animation.

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Filtering honors `RUST_LOG` and falls back to `info`.
/// Returns `false` when the feature is disabled or a global subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
