use approx::assert_abs_diff_eq;
use radar_chart::core::{Indicator, Point, PolarCoordinateSystem, project_point_list};
use radar_chart::extensions::{PolarInstance, StaticPolar};

fn polar(indicator_count: usize) -> StaticPolar {
    let indicators = (0..indicator_count)
        .map(|i| Indicator::new(format!("axis-{i}"), 10.0))
        .collect();
    StaticPolar::new().with_instance(
        0,
        PolarInstance::new(Point::new(200.0, 200.0), 100.0, indicators),
    )
}

#[test]
fn projection_returns_one_point_per_configured_axis() {
    let polar = polar(3);
    let points = project_point_list(&polar, 0, &[10.0, 5.0, 0.0]);

    assert_eq!(points.len(), 3);
    assert_abs_diff_eq!(points[0].x, 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[0].y, 100.0, epsilon = 1e-9);
    // Second spoke sits 120 degrees clockwise from the top.
    assert_abs_diff_eq!(points[1].x, 200.0 + 50.0 * (3f64).sqrt() / 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[1].y, 225.0, epsilon = 1e-9);
    // Zero collapses onto the center.
    assert_abs_diff_eq!(points[2].x, 200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(points[2].y, 200.0, epsilon = 1e-9);
}

#[test]
fn projection_skips_unconfigured_axes_without_gaps() {
    let polar = polar(2);
    let points = project_point_list(&polar, 0, &[10.0, 10.0, 10.0, 10.0]);

    assert_eq!(points.len(), 2);
    assert_eq!(points[0], polar.vector(0, 0, 10.0).expect("axis 0"));
    assert_eq!(points[1], polar.vector(0, 1, 10.0).expect("axis 1"));
}

#[test]
fn projection_never_closes_the_polygon() {
    let polar = polar(4);
    let points = project_point_list(&polar, 0, &[10.0, 10.0, 10.0, 10.0]);

    assert_eq!(points.len(), 4);
    assert_ne!(points.first(), points.last());
}

#[test]
fn unknown_polar_index_yields_empty_point_list() {
    let polar = polar(3);
    assert!(project_point_list(&polar, 7, &[1.0, 2.0, 3.0]).is_empty());
}

#[test]
fn empty_value_vector_yields_empty_point_list() {
    let polar = polar(3);
    assert!(project_point_list(&polar, 0, &[]).is_empty());
}
