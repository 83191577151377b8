use radar_chart::api::{
    Collaborators, DataItem, DropTargetRegistry, NoMarks, RadarOption, RadarSeriesBuilder,
    SeriesOption,
};
use radar_chart::core::{DataIndex, Indicator, Point};
use radar_chart::extensions::{PolarInstance, StaticPolar};
use radar_chart::render::ShapeRecord;

fn instance(center_x: f64) -> PolarInstance {
    PolarInstance::new(
        Point::new(center_x, 100.0),
        80.0,
        vec![
            Indicator::new("a", 10.0),
            Indicator::new("b", 10.0),
            Indicator::new("c", 10.0),
        ],
    )
}

fn polar() -> StaticPolar {
    StaticPolar::new()
        .with_instance(0, instance(100.0))
        .with_instance(1, instance(400.0))
}

fn build(option: &RadarOption) -> Vec<ShapeRecord> {
    let polar = polar();
    let marks = NoMarks;
    let mut collaborators = Collaborators::new(&polar, &marks);
    RadarSeriesBuilder::new()
        .build(option, &mut collaborators)
        .shapes
}

fn drop_boxes(shapes: &[ShapeRecord]) -> Vec<&ShapeRecord> {
    shapes.iter().filter(|shape| shape.is_drop_box()).collect()
}

#[test]
fn first_calculable_series_claims_the_drop_box() {
    let option = RadarOption::new(vec![
        SeriesOption::radar("plain", 0).with_data(vec![DataItem::new("x", vec![1.0, 1.0, 1.0])]),
        SeriesOption::radar("first", 0)
            .with_calculable(true)
            .with_data(vec![DataItem::new("y", vec![2.0, 2.0, 2.0])]),
        SeriesOption::radar("second", 0)
            .with_calculable(true)
            .with_data(vec![DataItem::new("z", vec![3.0, 3.0, 3.0])]),
    ]);
    let shapes = build(&option);

    let boxes = drop_boxes(&shapes);
    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].meta.series_index, 1);
    assert_eq!(boxes[0].meta.data_index, DataIndex::Sentinel);
    assert_eq!(boxes[0].meta.data_index.raw(), -1);
    assert!(boxes[0].calculable);
}

#[test]
fn each_polar_instance_gets_its_own_drop_box() {
    let option = RadarOption::new(vec![
        SeriesOption::radar("left", 0).with_data(vec![DataItem::new("x", vec![1.0, 1.0, 1.0])]),
        SeriesOption::radar("right", 1).with_data(vec![DataItem::new("y", vec![1.0, 1.0, 1.0])]),
    ])
    .with_calculable(true);
    let shapes = build(&option);

    let boxes = drop_boxes(&shapes);
    assert_eq!(boxes.len(), 2);
    assert_eq!(boxes[0].meta.series_index, 0);
    assert_eq!(boxes[1].meta.series_index, 1);
}

#[test]
fn drop_box_is_emitted_before_the_series_shapes() {
    let option = RadarOption::new(vec![
        SeriesOption::radar("only", 0)
            .with_calculable(true)
            .with_data(vec![DataItem::new("x", vec![1.0, 1.0, 1.0])]),
    ]);
    let shapes = build(&option);

    assert!(shapes[0].is_drop_box());
    assert!(shapes.last().expect("polygon").is_polygon());
    assert!(shapes.last().expect("polygon").draggable);
}

#[test]
fn calculable_series_with_empty_data_still_gets_a_drop_box() {
    let option = RadarOption::new(vec![SeriesOption::radar("empty", 0).with_calculable(true)]);
    let shapes = build(&option);

    assert_eq!(shapes.len(), 1);
    assert!(shapes[0].is_drop_box());
}

#[test]
fn non_calculable_series_never_get_drop_boxes() {
    let option = RadarOption::new(vec![
        SeriesOption::radar("plain", 0).with_data(vec![DataItem::new("x", vec![1.0, 1.0, 1.0])]),
    ]);
    assert!(drop_boxes(&build(&option)).is_empty());
}

#[test]
fn registry_is_idempotent_per_polar_index() {
    let polar = polar();
    let mut registry = DropTargetRegistry::new();

    let first = registry
        .ensure(0, 3, "series", 0, &polar)
        .expect("created");
    assert!(first.is_created());
    let second = registry
        .ensure(0, 5, "other", 0, &polar)
        .expect("existing");
    assert!(!second.is_created());
    assert_eq!(second.shape().meta.series_index, 3);
    assert_eq!(registry.len(), 1);
}

#[test]
fn registry_records_nothing_for_unknown_polar_index() {
    let polar = polar();
    let mut registry = DropTargetRegistry::new();

    assert!(registry.ensure(9, 0, "series", 0, &polar).is_none());
    assert!(!registry.contains(9));
    assert!(registry.is_empty());
}
