use radar_chart::api::{
    AreaStyleOption, BaseSeriesComponent, CalculableSeriesComponent, Collaborators, DataItem,
    ItemStyleOption, NoMarks, RadarSeriesBuilder, SeriesOption, SeriesType,
    ShapeListJsonContractV1, StateStyleOption,
};
use radar_chart::core::{DataIndex, Indicator, Point};
use radar_chart::extensions::{PolarInstance, StaticLegend, StaticPolar};
use radar_chart::interaction::{DragSession, DragStatus};
use radar_chart::render::{BrushType, NullRenderer, ShapeRecord, SymbolKind};
use radar_chart::{RadarChart, RadarOption};

fn polar() -> StaticPolar {
    StaticPolar::new().with_instance(
        0,
        PolarInstance::new(
            Point::new(200.0, 200.0),
            100.0,
            vec![
                Indicator::new("sales", 10.0),
                Indicator::new("admin", 10.0),
                Indicator::new("tech", 10.0),
            ],
        ),
    )
}

fn single_item_chart(calculable: bool) -> RadarChart<NullRenderer> {
    let option = RadarOption::new(vec![
        SeriesOption::radar("budget", 0).with_data(vec![DataItem::new("x", vec![1.0, 2.0, 3.0])]),
    ])
    .with_calculable(calculable);
    RadarChart::new(NullRenderer::default(), option, polar())
}

fn find_polygon<'a>(shapes: &'a [ShapeRecord], name: &str) -> &'a ShapeRecord {
    shapes
        .iter()
        .find(|shape| shape.is_polygon() && shape.meta.data_name == name)
        .expect("polygon by name")
}

#[test]
fn single_item_builds_three_markers_and_one_polygon() {
    let chart = single_item_chart(false);
    let shapes = chart.shapes();

    assert_eq!(shapes.len(), 4);
    assert_eq!(shapes.iter().filter(|shape| shape.is_symbol()).count(), 3);
    assert_eq!(shapes.iter().filter(|shape| shape.is_polygon()).count(), 1);
    assert!(!shapes.iter().any(ShapeRecord::is_drop_box));

    let polygon = find_polygon(shapes, "x");
    assert_eq!(polygon.meta.series_name, "budget");
    assert_eq!(polygon.meta.data_index, DataIndex::Item(0));
    assert_eq!(polygon.meta.value, vec![1.0, 2.0, 3.0]);
    assert_eq!(polygon.meta.indicators.len(), 3);
    assert!(!polygon.draggable);
    assert_eq!(chart.series_type(), SeriesType::Radar);
}

#[test]
fn drag_out_then_drop_into_empty_calculable_series() {
    let mut source = single_item_chart(true);
    let dragged = find_polygon(source.shapes(), "x").clone();
    assert!(dragged.draggable);

    let mut target_chart = RadarChart::new(
        NullRenderer::default(),
        RadarOption::new(vec![SeriesOption::radar("inbox", 0)]).with_calculable(true),
        polar(),
    );
    let drop_box = target_chart
        .shapes()
        .iter()
        .find(|shape| shape.is_drop_box())
        .expect("drop box for empty calculable series")
        .clone();

    let mut status = DragStatus::default();
    let mut target_session = DragSession::new();
    target_session.request_drop();
    target_chart
        .on_drop(Some(&drop_box), Some(&dragged), &mut target_session, &mut status)
        .expect("drop");

    let mut source_session = DragSession::new();
    source_session.request_drag_end();
    source
        .on_drag_end(Some(&dragged), &mut source_session, &mut status)
        .expect("drag out");

    assert!(status.drag_in && status.drag_out && status.need_refresh);
    assert!(source.option().series[0].data.is_empty());
    assert_eq!(
        target_chart.option().series[0].data,
        vec![DataItem::new("x", vec![1.0, 2.0, 3.0])]
    );

    assert!(source.refresh_if_needed(status));
    assert!(target_chart.refresh_if_needed(status));
    assert!(!source.shapes().iter().any(ShapeRecord::is_polygon));
    let moved = find_polygon(target_chart.shapes(), "x");
    assert_eq!(moved.meta.series_name, "inbox");
}

#[test]
fn merge_drop_rebuilds_with_combined_item() {
    let option = RadarOption::new(vec![SeriesOption::radar("budget", 0).with_data(vec![
        DataItem::new("w", vec![0.1, 0.2, 0.3]),
        DataItem::new("z", vec![0.2, 0.1, 0.7]),
    ])])
    .with_calculable(true);
    let mut chart = RadarChart::new(NullRenderer::default(), option, polar())
        .with_legend(StaticLegend::new());
    let target = find_polygon(chart.shapes(), "w").clone();
    let dragged = find_polygon(chart.shapes(), "z").clone();

    let mut session = DragSession::new();
    session.request_drop();
    let mut status = DragStatus::default();
    chart
        .on_drop(Some(&target), Some(&dragged), &mut session, &mut status)
        .expect("merge");
    session.request_drag_end();
    chart
        .on_drag_end(Some(&dragged), &mut session, &mut status)
        .expect("drag out");
    assert!(chart.refresh_if_needed(status));

    let data = &chart.option().series[0].data;
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].name.as_deref(), Some("w & z"));
    assert_eq!(data[0].value, vec![0.3, 0.3, 1.0]);
    assert!(chart.selection().get("w & z").copied().unwrap_or(false));
    assert!(find_polygon(chart.shapes(), "w & z").is_polygon());
}

#[test]
fn refresh_if_needed_skips_rebuild_without_request() {
    let mut chart = single_item_chart(false);
    chart.clear();
    assert!(chart.shapes().is_empty());

    assert!(!chart.refresh_if_needed(DragStatus::default()));
    assert!(chart.shapes().is_empty());

    chart.refresh(None);
    assert_eq!(chart.shapes().len(), 4);
}

#[test]
fn refresh_with_new_option_replaces_data() {
    let mut chart = single_item_chart(false);
    chart.refresh(Some(RadarOption::new(vec![SeriesOption::radar("other", 0).with_data(
        vec![
            DataItem::new("a", vec![1.0, 1.0, 1.0]),
            DataItem::new("b", vec![2.0, 2.0, 2.0]),
        ],
    )])));

    assert_eq!(chart.shapes().iter().filter(|shape| shape.is_polygon()).count(), 2);
    assert_eq!(chart.option().series[0].name.as_deref(), Some("other"));
}

#[test]
fn legend_hides_series_and_items() {
    let option = RadarOption::new(vec![
        SeriesOption::radar("hidden", 0).with_data(vec![DataItem::new("a", vec![1.0, 1.0, 1.0])]),
        SeriesOption::radar("shown", 0).with_data(vec![
            DataItem::new("b", vec![2.0, 2.0, 2.0]),
            DataItem::new("c", vec![3.0, 3.0, 3.0]),
        ]),
    ]);
    let mut legend = StaticLegend::new();
    legend.set_selected("hidden", false);
    legend.set_selected("c", false);
    let chart = RadarChart::new(NullRenderer::default(), option, polar()).with_legend(legend);

    let polygons: Vec<&str> = chart
        .shapes()
        .iter()
        .filter(|shape| shape.is_polygon())
        .map(|shape| shape.meta.data_name.as_str())
        .collect();
    assert_eq!(polygons, vec!["b"]);
    assert_eq!(chart.selection().get("hidden"), Some(&false));
    assert_eq!(chart.selection().get("shown"), Some(&true));
    assert_eq!(chart.selection().get("c"), Some(&false));
    assert_eq!(chart.selection().get("a"), None);
}

#[test]
fn render_hands_validated_frame_to_renderer() {
    let mut chart = single_item_chart(true);
    chart.render().expect("render");
    chart.render().expect("render again");

    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_shape_count, 5);
    assert_eq!(renderer.last_polygon_count, 1);
    assert_eq!(renderer.last_symbol_count, 3);
}

#[test]
fn animation_plan_covers_each_polygon() {
    let chart = single_item_chart(false);
    let tasks = chart.animation_plan();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].center, Point::new(200.0, 200.0));
    assert_eq!(tasks[0].delay_ms, 0);
}

#[test]
fn option_parses_from_camel_case_json() {
    let option = RadarOption::from_json_str(
        r##"{
            "calculable": true,
            "nameConnector": " + ",
            "animationEasing": "Linear",
            "series": [
                {
                    "type": "radar",
                    "name": "budget",
                    "polarIndex": 0,
                    "symbol": "emptyDiamond",
                    "itemStyle": { "normal": { "color": "#ff0000", "lineStyle": { "width": 3 } } },
                    "data": [ { "name": "x", "value": [1, 2, 3] } ]
                },
                { "type": "line", "name": "ignored" }
            ]
        }"##,
    )
    .expect("valid option");

    assert!(option.calculable);
    assert_eq!(option.name_connector, " + ");
    assert_eq!(option.animation_duration, 2000);
    assert!(option.series[0].is_radar());
    assert_eq!(option.series[1].series_type, SeriesType::Other);
    assert_eq!(option.series[0].symbol, Some(SymbolKind::EmptyDiamond));

    let chart = RadarChart::new(NullRenderer::default(), option, polar());
    let shapes = chart.shapes();
    assert_eq!(shapes.iter().filter(|shape| shape.is_polygon()).count(), 1);
    assert_eq!(shapes.iter().filter(|shape| shape.is_drop_box()).count(), 1);
    assert!(shapes.iter().all(|shape| shape.meta.series_index == 0));
}

#[test]
fn malformed_option_json_is_rejected() {
    assert!(RadarOption::from_json_str("{ \"series\": 3 }").is_err());
    assert!(RadarOption::from_json_str(r#"{ "color": ["not-a-color"] }"#).is_err());
}

#[test]
fn shape_list_contract_round_trips_through_json() {
    let chart = single_item_chart(true);
    let json = chart.shapes_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let contract = ShapeListJsonContractV1::from_json_str(&json).expect("parse");
    assert_eq!(contract.shapes.len(), chart.shapes().len());
    assert!(contract.shapes[0].is_drop_box());
    assert_eq!(contract.shapes[0].meta.data_index, DataIndex::Sentinel);

    let bumped = json.replace("\"schema_version\": 1", "\"schema_version\": 2");
    assert!(ShapeListJsonContractV1::from_json_str(&bumped).is_err());
}

#[test]
fn default_tracing_initializes_at_most_once() {
    let _ = radar_chart::telemetry::init_default_tracing();
    assert!(!radar_chart::telemetry::init_default_tracing());
}

fn build_with_legend(option: &RadarOption, legend: &mut StaticLegend) {
    let polar = polar();
    let marks = NoMarks;
    let mut collaborators = Collaborators::new(&polar, &marks).with_legend(legend);
    let _ = RadarSeriesBuilder::new().build(option, &mut collaborators);
}

#[test]
fn first_build_sets_legend_icon_brush_for_new_items() {
    let area = ItemStyleOption {
        normal: StateStyleOption {
            area_style: Some(AreaStyleOption::default()),
            ..StateStyleOption::default()
        },
        ..ItemStyleOption::default()
    };
    let option = RadarOption::new(vec![SeriesOption::radar("budget", 0).with_data(vec![
        DataItem::new("x", vec![1.0, 2.0, 3.0]),
        DataItem::new("y", vec![3.0, 2.0, 1.0]).with_item_style(area),
    ])]);
    let mut legend = StaticLegend::new();

    build_with_legend(&option, &mut legend);

    assert_eq!(legend.entry("x").map(|entry| entry.brush), Some(BrushType::Stroke));
    assert_eq!(legend.entry("y").map(|entry| entry.brush), Some(BrushType::Both));
    assert_eq!(legend.names().collect::<Vec<_>>(), vec!["x", "y"]);
}
